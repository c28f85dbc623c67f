/// Composite score: unweighted mean of the normalized classified indicators
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_HEALTH_SCORE, MIN_HEALTH_SCORE};
use crate::types::{negative_set, positive_set, CountryIndicatorSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScore {
    pub score: u8,
    /// Number of classified indicators that contributed; zero means fallback
    pub scored_indicators: usize,
}

impl CompositeScore {
    pub fn is_fallback(&self) -> bool {
        self.scored_indicators == 0
    }
}

/// Score one country from whatever classified indicators it reports.
///
/// Positive indicators are summed before negative ones. Missing indicators are
/// skipped rather than penalized; with none present the score is `neutral_score`.
pub fn aggregate(indicators: &CountryIndicatorSet, neutral_score: u8) -> CompositeScore {
    let mut sum = 0.0;
    let mut count = 0usize;

    for definition in positive_set().chain(negative_set()) {
        let (Some(rule), Some(raw)) = (definition.rule, indicators.value(definition.indicator)) else {
            continue;
        };
        sum += rule.apply(raw);
        count += 1;
    }

    if count == 0 {
        return CompositeScore {
            score: neutral_score.min(MAX_HEALTH_SCORE),
            scored_indicators: 0,
        };
    }

    let mean = (sum / count as f64).round();
    CompositeScore {
        score: mean.clamp(f64::from(MIN_HEALTH_SCORE), f64::from(MAX_HEALTH_SCORE)) as u8,
        scored_indicators: count,
    }
}
