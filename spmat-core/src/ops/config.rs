//! Configuration for matrix multiplication

/// Number of examined entry pairs between progress reports
pub const DEFAULT_CHUNK_SIZE: u64 = 1_000_000;

/// How the inner loop of a product finds matching entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplyStrategy {
    /// Compare every entry of the left operand with every entry of the right
    Naive,
    /// Bucket the right operand by row and only visit the matching bucket
    #[default]
    RowIndexed,
}

/// Configuration for [`multiply_with_config`](super::multiply_with_config)
#[derive(Debug, Clone)]
pub struct MultiplyConfig {
    /// Examined pairs between progress reports and cancellation checks
    pub chunk_size: u64,
    /// Inner loop strategy
    pub strategy: MultiplyStrategy,
}

impl MultiplyConfig {
    /// Set chunk size in examined pairs (clamped to at least 1)
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the inner loop strategy
    pub fn with_strategy(mut self, strategy: MultiplyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Get chunk size, never zero
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size.max(1)
    }
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            strategy: MultiplyStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MultiplyConfig::default();
        assert_eq!(config.chunk_size(), 1_000_000);
        assert_eq!(config.strategy, MultiplyStrategy::RowIndexed);
    }

    #[test]
    fn test_builder() {
        let config = MultiplyConfig::default()
            .with_chunk_size(0)
            .with_strategy(MultiplyStrategy::Naive);
        assert_eq!(config.chunk_size(), 1);
        assert_eq!(config.strategy, MultiplyStrategy::Naive);
    }
}
