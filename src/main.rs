//! Star Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use star_catch::consts::FRAME_DT;
    use star_catch::platform::web::{CanvasPainter, DomHud, LocalStorage};
    use star_catch::{GameController, Phase, Tuning};

    /// Game instance holding all state
    struct Game {
        controller: GameController<LocalStorage, DomHud>,
        painter: CanvasPainter,
        last_time: f64,
        loop_active: bool,
    }

    impl Game {
        fn paint(&self) {
            self.painter.paint(&self.controller.render());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Star Catch starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let painter = CanvasPainter::new(&canvas).expect("no 2d context");

        let store = LocalStorage::open();
        let tuning = Tuning::load(&store);
        let seed = js_sys::Date::now() as u64;
        let controller = GameController::new(store, DomHud::new(document), tuning, seed);

        let game = Rc::new(RefCell::new(Game {
            controller,
            painter,
            last_time: 0.0,
            loop_active: false,
        }));

        // Initial empty frame behind the "press any key" prompt
        game.borrow().paint();

        setup_input_handlers(game.clone());
        setup_restart_button(game);

        log::info!("Star Catch ready, press any key to start");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: held-key tracking, and the first press starts the round
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().controller.key_down(&event.key());
                ensure_loop(&game);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().controller.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().controller.restart_game();
                ensure_loop(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Start the animation loop if a round is running and no loop is scheduled
    fn ensure_loop(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active || g.controller.phase() != Phase::Running {
                return;
            }
            g.loop_active = true;
            g.last_time = 0.0;
        }
        request_animation_frame(game.clone());
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            g.last_time = time;

            g.controller.advance(dt);
            g.paint();

            // Round over: let the loop lapse until the next start
            if !g.controller.state().running {
                g.loop_active = false;
                return;
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Star Catch (native) starting...");
    log::info!("Native mode plays one headless round with an autopilot basket");

    headless::run(std::env::args().skip(1).collect());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use star_catch::consts::{FRAME_DT, KEY_LEFT, KEY_RIGHT};
    use star_catch::hud::LogHud;
    use star_catch::persistence::MemoryStore;
    use star_catch::sim::GameState;
    use star_catch::{GameController, Phase, Tuning};

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        score: u32,
        high_score: u32,
        new_high_score: bool,
        final_star_speed: f32,
        frames: u32,
    }

    /// `[tuning.json] [seed]`
    pub fn run(args: Vec<String>) {
        let tuning = match args.first() {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(json) => Tuning::from_json(&json),
                Err(e) => {
                    log::warn!("Could not read {}: {}, using default tuning", path, e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        };
        let seed = args
            .get(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_seed);

        let mut game = GameController::new(MemoryStore::new(), LogHud, tuning, seed);
        game.start_game();

        let mut frames = 0;
        while game.phase() == Phase::Running {
            steer(&mut game);
            frames += game.advance(FRAME_DT).frames;
        }

        let state = game.state();
        let summary = RunSummary {
            seed,
            score: state.score,
            high_score: game.high_score(),
            new_high_score: game.is_new_high_score(),
            final_star_speed: state.star_speed,
            frames,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize summary: {}", e),
        }
    }

    /// Hold the arrow key that moves the basket under the lowest star
    fn steer(game: &mut GameController<MemoryStore, LogHud>) {
        let target = lowest_star_x(game.state());
        let basket = game.state().basket;
        let center = basket.pos.x + basket.width / 2.0;
        let step = game.tuning().basket_step;

        let (left, right) = match target {
            Some(x) if x < center - step => (true, false),
            Some(x) if x > center + step => (false, true),
            _ => (false, false),
        };
        press(game, KEY_LEFT, left);
        press(game, KEY_RIGHT, right);
    }

    fn press(game: &mut GameController<MemoryStore, LogHud>, key: &str, held: bool) {
        if held {
            game.key_down(key);
        } else {
            game.key_up(key);
        }
    }

    fn lowest_star_x(state: &GameState) -> Option<f32> {
        state
            .stars
            .iter()
            .filter(|s| s.pos.y < state.basket.pos.y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|s| s.pos.x)
    }

    fn default_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
