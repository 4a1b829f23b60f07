//! Catch detection
//!
//! Axis-aligned overlap between a star's bounds and the basket rectangle. The
//! star extends `size` to the left and right of its center but only `size`
//! below its anchor vertically, which is why the vertical test is asymmetric.

use super::state::{Basket, Star};

/// Whether `star` overlaps `basket` on all four sides
pub fn star_caught(star: &Star, basket: &Basket) -> bool {
    star.pos.y + star.size > basket.pos.y
        && star.pos.y < basket.pos.y + basket.height
        && star.pos.x + star.size > basket.pos.x
        && star.pos.x - star.size < basket.pos.x + basket.width
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn star_at(x: f32, y: f32) -> Star {
        let mut star = Star::new(x, 2.0);
        star.pos = Vec2::new(x, y);
        star
    }

    #[test]
    fn test_star_in_basket_caught() {
        let basket = Basket::default();
        assert!(star_caught(&star_at(400.0, 555.0), &basket));
    }

    #[test]
    fn test_star_above_basket_missed() {
        let basket = Basket::default();
        // Bottom of star exactly touches basket top: not an overlap
        assert!(!star_caught(&star_at(400.0, 535.0), &basket));
        assert!(star_caught(&star_at(400.0, 535.5), &basket));
    }

    #[test]
    fn test_star_below_basket_missed() {
        let basket = Basket::default();
        assert!(!star_caught(&star_at(400.0, 580.0), &basket));
    }

    #[test]
    fn test_edge_graze_caught() {
        let basket = Basket::default();
        // Center left of the basket, but the star's right side overlaps it
        assert!(star_caught(&star_at(361.0, 560.0), &basket));
        assert!(!star_caught(&star_at(360.0, 560.0), &basket));
        // Mirror on the right edge (basket spans 375..425)
        assert!(star_caught(&star_at(439.0, 560.0), &basket));
        assert!(!star_caught(&star_at(440.0, 560.0), &basket));
    }

    proptest! {
        #[test]
        fn prop_inside_always_caught(
            bx in 0.0f32..750.0,
            dx in 0.0f32..49.0,
            dy in 0.0f32..29.0,
        ) {
            let basket = Basket { pos: Vec2::new(bx, 550.0), ..Basket::default() };
            let star = star_at(bx + dx, 550.0 + dy);
            prop_assert!(star_caught(&star, &basket));
        }

        #[test]
        fn prop_left_or_right_never_caught(
            bx in 0.0f32..750.0,
            gap in 0.5f32..300.0,
            y in -50.0f32..700.0,
            right in any::<bool>(),
        ) {
            let basket = Basket { pos: Vec2::new(bx, 550.0), ..Basket::default() };
            let size = star_at(0.0, 0.0).size;
            let x = if right {
                bx + basket.width + size + gap
            } else {
                bx - size - gap
            };
            prop_assert!(!star_caught(&star_at(x, y), &basket));
        }
    }
}
