pub mod dataset;
pub mod indicator;
pub mod metrics;
pub mod range;
pub mod record;

pub use dataset::{CountryEntry, CountryIndicatorSet, Dataset};
pub use indicator::{
    catalog, negative_set, positive_set, Direction, Indicator, IndicatorCategory,
    IndicatorDefinition, NormalizationRule, UnitFamily, CATALOG,
};
pub use metrics::ComputeMetrics;
pub use range::{BandDistribution, RankedCountry, ScoreBand, ScoreRange};
pub use record::{CountryHealthRecord, DisplayIndicators, Scoreboard, SourceAttribution};
