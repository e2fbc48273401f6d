//! Configuration for more-like-this requests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MoreLikeError, Result};

/// Limits applied to every request of a [`MoreLikeThis`](crate::mlt::MoreLikeThis)
/// instance unless a call overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MltConfig {
    /// Maximum number of similar documents to return.
    pub result_limit: usize,

    /// Minimum number of occurrences of a stem in the seed. Values above 1
    /// drop rarer stems before scoring.
    pub term_frequency_threshold: u32,

    /// Maximum number of terms that make it into the query.
    pub term_count_limit: usize,
}

impl Default for MltConfig {
    fn default() -> Self {
        Self {
            result_limit: 10,
            term_frequency_threshold: 1,
            term_count_limit: 25,
        }
    }
}

impl MltConfig {
    /// Parse a JSON configuration. Missing keys take their defaults.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: MltConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every limit is at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(MoreLikeError::invalid_config("result_limit must be at least 1"));
        }
        if self.term_frequency_threshold == 0 {
            return Err(MoreLikeError::invalid_config(
                "term_frequency_threshold must be at least 1",
            ));
        }
        if self.term_count_limit == 0 {
            return Err(MoreLikeError::invalid_config(
                "term_count_limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Apply per-call overrides on top of this configuration.
    pub fn resolve(&self, options: &MltOptions) -> MltConfig {
        MltConfig {
            result_limit: options.result_limit.unwrap_or(self.result_limit),
            term_frequency_threshold: options
                .term_frequency_threshold
                .unwrap_or(self.term_frequency_threshold),
            term_count_limit: options.term_count_limit.unwrap_or(self.term_count_limit),
        }
    }
}

/// Options for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MltOptions {
    /// Override [`MltConfig::result_limit`].
    pub result_limit: Option<usize>,

    /// Override [`MltConfig::term_frequency_threshold`].
    pub term_frequency_threshold: Option<u32>,

    /// Override [`MltConfig::term_count_limit`].
    pub term_count_limit: Option<usize>,

    /// Number of leading results to skip.
    pub skip: usize,

    /// Deadline applied separately to the seed lookup, the counting fan-out
    /// and the final search.
    pub timeout: Option<Duration>,
}

impl MltOptions {
    /// Create options with the given result limit.
    pub fn new(result_limit: usize) -> Self {
        Self {
            result_limit: Some(result_limit),
            ..Default::default()
        }
    }

    /// Set the term frequency threshold.
    pub fn with_term_frequency_threshold(mut self, threshold: u32) -> Self {
        self.term_frequency_threshold = Some(threshold);
        self
    }

    /// Set the term count limit.
    pub fn with_term_count_limit(mut self, limit: usize) -> Self {
        self.term_count_limit = Some(limit);
        self
    }

    /// Set the number of results to skip.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Set the timeout for this request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MltConfig::default();
        assert_eq!(config.result_limit, 10);
        assert_eq!(config.term_frequency_threshold, 1);
        assert_eq!(config.term_count_limit, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_str() {
        let config = MltConfig::from_json_str(r#"{"term_count_limit": 5}"#).unwrap();
        assert_eq!(config.term_count_limit, 5);
        assert_eq!(config.result_limit, 10);

        let err = MltConfig::from_json_str(r#"{"result_limit": 0}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: result_limit must be at least 1"
        );

        assert!(matches!(
            MltConfig::from_json_str("not json"),
            Err(MoreLikeError::Json(_))
        ));
    }

    #[test]
    fn test_options_override() {
        let options = MltOptions::new(3)
            .with_term_frequency_threshold(2)
            .with_skip(1)
            .with_timeout(Duration::from_secs(5));

        let resolved = MltConfig::default().resolve(&options);
        assert_eq!(resolved.result_limit, 3);
        assert_eq!(resolved.term_frequency_threshold, 2);
        assert_eq!(resolved.term_count_limit, 25);
        assert_eq!(options.skip, 1);
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    }
}
