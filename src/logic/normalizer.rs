/// Per-indicator normalization to a 0-100 goodness value
use crate::constants::{LIFE_EXPECTANCY_REFERENCE_YEARS, NORMALIZED_CEILING, NORMALIZED_FLOOR};
use crate::types::{Indicator, NormalizationRule};

impl NormalizationRule {
    /// Map a finite raw value onto 0..=100, higher meaning healthier
    pub fn apply(self, raw: f64) -> f64 {
        let value = match self {
            NormalizationRule::LifeExpectancy => raw / LIFE_EXPECTANCY_REFERENCE_YEARS * 100.0,
            NormalizationRule::Percentage => raw,
            // per 100,000 live births
            NormalizationRule::MaternalMortality => 100.0 - raw / 10.0,
            // per 1,000 live births
            NormalizationRule::ChildMortality => 100.0 - raw / 2.0,
            NormalizationRule::Malnutrition => 100.0 - raw * 2.0,
            // per 100,000 population
            NormalizationRule::TuberculosisIncidence => 100.0 - raw / 5.0,
            NormalizationRule::HivPrevalence => 100.0 - raw * 20.0,
            // per 1,000 population at risk
            NormalizationRule::MalariaIncidence => 100.0 - raw / 5.0,
        };
        value.clamp(NORMALIZED_FLOOR, NORMALIZED_CEILING)
    }
}

/// Normalize one raw value for `indicator`.
///
/// Returns `None` for display-only indicators, which have no rule.
pub fn normalize(indicator: Indicator, raw: f64) -> Option<f64> {
    indicator.rule().map(|rule| rule.apply(raw))
}
