//! Best score persistence
//!
//! A single integer stored as a decimal string under a fixed key.

use crate::persistence::KeyValueStore;

/// Best score, mirrored from storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "catchStarsHighScore";

    /// Read the stored best score; absent or malformed values count as 0
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = match store.get(Self::STORAGE_KEY) {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                log::warn!("Ignoring malformed high score {:?}", raw);
                0
            }),
            None => 0,
        };
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a finished round. Returns true (and persists) only when `score`
    /// beats the best stored so far. Re-reads storage first so another tab's
    /// newer best is not overwritten.
    pub fn submit(&mut self, store: &mut dyn KeyValueStore, score: u32) -> bool {
        *self = Self::load(&*store);
        if score > self.best {
            log::info!("New high score: {} (previous {})", score, self.best);
            store.set(Self::STORAGE_KEY, &score.to_string());
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn store_with(best: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(HighScore::STORAGE_KEY, best);
        store
    }

    #[test]
    fn test_first_score_becomes_high_score() {
        let mut store = MemoryStore::new();
        let mut high = HighScore::load(&store);
        assert_eq!(high.best(), 0);
        assert!(high.submit(&mut store, 7));
        assert_eq!(high.best(), 7);
        assert_eq!(store.get(HighScore::STORAGE_KEY).as_deref(), Some("7"));
    }

    #[test]
    fn test_zero_score_never_flags() {
        let mut store = MemoryStore::new();
        let mut high = HighScore::load(&store);
        assert!(!high.submit(&mut store, 0));
        assert!(store.get(HighScore::STORAGE_KEY).is_none());
    }

    #[test]
    fn test_equal_or_lower_does_not_overwrite() {
        let mut store = store_with("12");
        let mut high = HighScore::load(&store);
        assert!(!high.submit(&mut store, 12));
        assert!(!high.submit(&mut store, 3));
        assert_eq!(HighScore::load(&store).best(), 12);
    }

    #[test]
    fn test_higher_overwrites() {
        let mut store = store_with("12");
        let mut high = HighScore::load(&store);
        assert!(high.submit(&mut store, 13));
        assert_eq!(HighScore::load(&store).best(), 13);
    }

    #[test]
    fn test_submit_sees_newer_stored_best() {
        let mut store = MemoryStore::new();
        let mut high = HighScore::load(&store);
        store.set(HighScore::STORAGE_KEY, "30");
        assert!(!high.submit(&mut store, 20));
        assert_eq!(high.best(), 30);
    }

    #[test]
    fn test_malformed_value_reads_as_zero() {
        assert_eq!(HighScore::load(&store_with("lots")).best(), 0);
        assert_eq!(HighScore::load(&store_with("-4")).best(), 0);
        assert_eq!(HighScore::load(&store_with(" 9 ")).best(), 9);
    }
}
