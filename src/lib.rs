//! WHO health-indicator normalization and composite scoring.
//!
//! Raw per-country indicator values go in; a 0-100 health score per country,
//! the record the dashboard renders, and the score range for the map legend
//! come out. The same pipeline is available natively through
//! [`compute_scoreboard`] and to the browser through [`HealthScoreEngine`].

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;

pub use config::{EngineConfig, IngestConfig};
pub use data::{DatasetBuilder, IngestReport, ObservationRow};
pub use error::EngineError;
pub use logic::{
    aggregate, band_distribution, compute_scoreboard, normalize, rank_countries,
    reduce_score_range, CompositeScore,
};
pub use service::{compute_health_scores, HealthScoreEngine};
pub use types::{
    catalog, CountryEntry, CountryHealthRecord, CountryIndicatorSet, Dataset, Indicator,
    IndicatorDefinition, ScoreBand, ScoreRange, Scoreboard,
};
