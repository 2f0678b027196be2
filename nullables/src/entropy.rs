//! Nullable entropy — deterministic randomness for testing.

use skycover_entropy::{EntropyError, EntropySource};

/// A deterministic entropy source for testing.
///
/// Answers lookback queries from a fixed table, cycling when the lookback
/// exceeds the table length. The same offset always yields the same bytes.
pub struct NullEntropy {
    values: Vec<[u8; 32]>,
}

impl NullEntropy {
    /// Create with a table of deterministic entropy values.
    pub fn new(values: Vec<[u8; 32]>) -> Self {
        Self { values }
    }

    /// Create with a single value returned for every lookback.
    pub fn constant(value: [u8; 32]) -> Self {
        Self::new(vec![value])
    }

    /// Create a source with no values; every query fails.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl EntropySource for NullEntropy {
    fn entropy_for(&self, lookback: u64) -> Result<[u8; 32], EntropyError> {
        if self.values.is_empty() {
            return Err(EntropyError::Unavailable("no entropy configured".into()));
        }
        Ok(self.values[lookback as usize % self.values.len()])
    }

    fn name(&self) -> &str {
        "null-entropy"
    }
}
