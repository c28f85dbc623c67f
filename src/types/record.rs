use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::dataset::CountryIndicatorSet;
use super::range::ScoreRange;

/// Static provenance shown next to every record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceAttribution {
    pub source: String,
    pub publication: String,
    pub url: String,
}

impl Default for SourceAttribution {
    fn default() -> Self {
        Self {
            source: "World Health Organization".to_string(),
            publication: "World Health Statistics, statistical annex".to_string(),
            url: "https://www.who.int/data/gho".to_string(),
        }
    }
}

/// Headline values for map tooltips; zero when the country does not report them
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayIndicators {
    pub life_expectancy: f64,
    pub infant_mortality: f64,
    pub immunization_coverage: f64,
    pub coverage_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryHealthRecord {
    pub code: String,
    pub name: String,
    pub health_score: u8,
    pub scored_indicator_count: usize,
    pub raw_indicators: CountryIndicatorSet,
    pub display_indicators: DisplayIndicators,
    pub source_attribution: SourceAttribution,
}

impl CountryHealthRecord {
    /// True when the score is the neutral fallback rather than computed
    pub fn is_unscored(&self) -> bool {
        self.scored_indicator_count == 0
    }
}

/// Records and score range for one dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub records: BTreeMap<String, CountryHealthRecord>,
    pub range: Option<ScoreRange>,
}

impl Scoreboard {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&CountryHealthRecord> {
        self.records.get(code)
    }

    pub fn unscored_codes(&self) -> Vec<String> {
        self.records
            .values()
            .filter(|record| record.is_unscored())
            .map(|record| record.code.clone())
            .collect()
    }
}
