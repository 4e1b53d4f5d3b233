//! Cache Statistics Module
//!
//! Tracks store activity counters including puts, hits, misses, and removals.

// == Cache Stats ==
/// Tracks store activity counters.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of insert/overwrite operations
    pub puts: u64,
    /// Number of successful retrievals
    pub hits: u64,
    /// Number of failed retrievals (key not found)
    pub misses: u64,
    /// Number of entries removed
    pub removals: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the retrieval hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no retrievals have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Put ==
    /// Increments the put counter.
    pub fn record_put(&mut self) {
        self.puts += 1;
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Removal ==
    /// Increments the removal counter.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.puts, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.removals, 0);
    }

    #[test]
    fn test_hit_rate_no_retrievals() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.hit_rate(), 1.0);
    }

    #[test]
    fn test_hit_rate_all_misses() {
        let mut stats = CacheStats::new();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_counters() {
        let mut stats = CacheStats::new();
        stats.record_put();
        stats.record_put();
        stats.record_removal();
        assert_eq!(stats.puts, 2);
        assert_eq!(stats.removals, 1);
    }
}
