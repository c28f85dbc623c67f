//! Engine and ingest configuration.
//!
//! Both structs deserialize from partial JS objects: any field left out keeps
//! its default.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MIN_INDICATORS_PER_COUNTRY, DISAGGREGATION_PRIORITY, MAX_HEALTH_SCORE,
    NEUTRAL_HEALTH_SCORE, REGIONAL_LOCATION_CODES,
};
use crate::types::SourceAttribution;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Score given to countries with no classified indicators
    pub neutral_score: u8,
    pub attribution: SourceAttribution,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            neutral_score: NEUTRAL_HEALTH_SCORE,
            attribution: SourceAttribution::default(),
        }
    }

    pub fn neutral_score(&self) -> u8 {
        self.neutral_score.min(MAX_HEALTH_SCORE)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngestConfig {
    /// Countries reporting fewer indicators than this are left out
    pub min_indicators_per_country: usize,
    pub excluded_location_codes: Vec<String>,
    /// Disaggregation labels, best first
    pub disaggregation_priority: Vec<String>,
}

impl IngestConfig {
    pub fn new() -> Self {
        Self {
            min_indicators_per_country: DEFAULT_MIN_INDICATORS_PER_COUNTRY,
            excluded_location_codes: REGIONAL_LOCATION_CODES.iter().map(|c| c.to_string()).collect(),
            disaggregation_priority: DISAGGREGATION_PRIORITY.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn with_min_indicators(mut self, min_indicators_per_country: usize) -> Self {
        self.min_indicators_per_country = min_indicators_per_country;
        self
    }

    /// Priority slot for a disaggregation label; lower is better.
    ///
    /// An exact match wins, then the first non-empty label contained in the
    /// value. Anything else ranks after every listed label.
    pub fn disaggregation_rank(&self, disaggregation: &str) -> usize {
        let disaggregation = disaggregation.trim();
        self.disaggregation_priority
            .iter()
            .position(|label| label == disaggregation)
            .or_else(|| {
                self.disaggregation_priority
                    .iter()
                    .position(|label| !label.is_empty() && disaggregation.contains(label.as_str()))
            })
            .unwrap_or(self.disaggregation_priority.len())
    }

    pub fn is_excluded(&self, location_code: &str) -> bool {
        self.excluded_location_codes
            .iter()
            .any(|code| code.eq_ignore_ascii_case(location_code))
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.neutral_score(), 50);
        assert_eq!(config.attribution.source, "World Health Organization");
    }

    #[test]
    fn test_neutral_score_is_capped() {
        let config = EngineConfig {
            neutral_score: 200,
            ..EngineConfig::default()
        };
        assert_eq!(config.neutral_score(), 100);
    }

    #[test]
    fn test_partial_engine_config_from_json() {
        let config: EngineConfig = serde_json::from_str(r#"{ "neutralScore": 40 }"#).unwrap();
        assert_eq!(config.neutral_score, 40);
        assert_eq!(config.attribution, SourceAttribution::default());
    }

    #[test]
    fn test_disaggregation_rank() {
        let config = IngestConfig::default();
        assert_eq!(config.disaggregation_rank("NA"), 0);
        assert_eq!(config.disaggregation_rank("BTSX"), 1);
        assert_eq!(config.disaggregation_rank("SEX_BTSX"), 2);
        assert_eq!(config.disaggregation_rank("RESIDENCEAREATYPE_TOTAL"), 3);
        assert_eq!(config.disaggregation_rank(""), 5);
        assert_eq!(config.disaggregation_rank("SEX_FMLE"), 6);
    }

    #[test]
    fn test_regional_codes_excluded() {
        let config = IngestConfig::default();
        assert!(config.is_excluded("AFR"));
        assert!(config.is_excluded("global"));
        assert!(!config.is_excluded("NOR"));
    }
}
