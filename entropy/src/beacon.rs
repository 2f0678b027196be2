//! Block beacon — a ring buffer of recently observed entropy values.

use crate::{EntropyError, EntropySource, LOOKBACK_WINDOW};
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Production entropy source fed by the surrounding system.
///
/// The host observes one value per block (or per tick) via [`observe`]; the
/// beacon keeps the last [`LOOKBACK_WINDOW`] of them and answers lookback
/// queries deterministically until the next observation shifts the window.
///
/// [`observe`]: BlockBeacon::observe
pub struct BlockBeacon {
    recent: Mutex<VecDeque<[u8; 32]>>,
}

impl BlockBeacon {
    pub fn new() -> Self {
        Self {
            recent: Mutex::new(VecDeque::new()),
        }
    }

    /// Record a newly observed entropy value (most recent first).
    pub fn observe(&self, value: [u8; 32]) {
        let mut recent = self.recent.lock().unwrap();
        recent.push_front(value);
        recent.truncate(LOOKBACK_WINDOW as usize);
    }

    /// Observe a value drawn from the OS RNG.
    ///
    /// Convenience for hosts without a block-derived feed.
    pub fn observe_random(&self) {
        let mut value = [0u8; 32];
        rand::rng().fill_bytes(&mut value);
        self.observe(value);
    }

    /// Number of values currently in the window.
    pub fn len(&self) -> usize {
        self.recent.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.lock().unwrap().is_empty()
    }
}

impl Default for BlockBeacon {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for BlockBeacon {
    fn entropy_for(&self, lookback: u64) -> Result<[u8; 32], EntropyError> {
        let recent = self.recent.lock().unwrap();
        recent
            .get(lookback as usize)
            .copied()
            .ok_or(EntropyError::OutOfWindow {
                requested: lookback,
                available: recent.len() as u64,
            })
    }

    fn name(&self) -> &str {
        "block-beacon"
    }
}
