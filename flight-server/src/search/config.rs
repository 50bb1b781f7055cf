//! Search configuration.

use chrono::Duration;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum connection time at the intermediate airport (minutes).
    /// Connections tighter than this are rejected.
    pub min_layover_mins: i64,

    /// Maximum number of calendar months one search may span.
    /// Wider requests are rejected as invalid.
    pub max_months: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_layover_mins: i64, max_months: usize) -> Self {
        Self {
            min_layover_mins,
            max_months,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 120, // 2 hours
            max_months: 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.min_layover_mins, 120);
        assert_eq!(config.max_months, 12);
        assert_eq!(config.min_layover(), Duration::hours(2));
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(90, 6);

        assert_eq!(config.min_layover(), Duration::minutes(90));
        assert_eq!(config.max_months, 6);
    }
}
