mod aggregator;
mod normalizer;
mod range_reducer;
mod ranking;

pub use aggregator::{aggregate, CompositeScore};
pub use normalizer::normalize;
pub use range_reducer::reduce_score_range;
pub use ranking::{band_distribution, rank_countries};

use std::collections::BTreeMap;

use crate::config::{EngineConfig, IngestConfig};
use crate::data::{ComputeMetricBuilder, CountryRecordBuilder, DatasetBuilder, ObservationRow, ScoreboardData};
use crate::types::{BandDistribution, CountryHealthRecord, Dataset, RankedCountry, Scoreboard};

/// Run the whole pipeline over one dataset. Pure; same input, same output.
pub fn compute_scoreboard(dataset: &Dataset, config: &EngineConfig) -> Scoreboard {
    let record_builder = CountryRecordBuilder::new(config.attribution.clone());
    let neutral_score = config.neutral_score();

    let records: BTreeMap<String, CountryHealthRecord> = dataset
        .countries
        .iter()
        .map(|(code, entry)| {
            let composite = aggregate(&entry.indicators, neutral_score);
            (code.clone(), record_builder.build(code, entry, composite))
        })
        .collect();
    let range = reduce_score_range(records.values().map(|record| record.health_score));

    Scoreboard { records, range }
}

pub struct ScoreboardLogic {
    data: ScoreboardData,
    metric_builder: ComputeMetricBuilder,
}

impl ScoreboardLogic {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            data: ScoreboardData::new(config),
            metric_builder: ComputeMetricBuilder::new(),
        }
    }

    /// Score `dataset`, replacing whatever was loaded before.
    /// Returns the number of countries scored.
    pub fn load(&mut self, dataset: &Dataset) -> usize {
        let config = self.data.config().clone();
        let (scoreboard, duration) = self
            .metric_builder
            .measure(|| compute_scoreboard(dataset, &config));

        for code in scoreboard.unscored_codes() {
            tracing::warn!(
                country = %code,
                neutral_score = config.neutral_score(),
                "no classified indicators reported; using neutral score"
            );
        }
        tracing::info!(
            countries = scoreboard.len(),
            min = scoreboard.range.map(|r| r.min),
            max = scoreboard.range.map(|r| r.max),
            duration_ms = duration,
            "health scores computed"
        );

        let count = scoreboard.len();
        self.data.replace_scoreboard(scoreboard);
        self.data.set_ingest_report(None);
        self.data.metrics_mut().update_compute(duration);
        count
    }

    /// Build a dataset from WHO annex rows, then score it
    pub fn load_observations(&mut self, rows: &[ObservationRow], ingest: IngestConfig) -> usize {
        let mut dataset_builder = DatasetBuilder::new(ingest);
        dataset_builder.extend(rows);
        let (dataset, report) = dataset_builder.build();
        tracing::info!(
            rows = report.rows_read,
            accepted = report.rows_accepted,
            countries = report.countries_kept,
            "observations ingested"
        );

        let count = self.load(&dataset);
        self.data.set_ingest_report(Some(report));
        count
    }

    pub fn ranking(&self) -> Vec<RankedCountry> {
        rank_countries(self.data.scoreboard().records.values())
    }

    pub fn band_distribution(&self) -> BandDistribution {
        band_distribution(self.data.scoreboard().records.values())
    }

    pub fn data(&self) -> &ScoreboardData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut ScoreboardData {
        &mut self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for ScoreboardLogic {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CountryEntry, CountryIndicatorSet, Indicator, ScoreRange};

    fn entry(name: &str, values: &[(Indicator, f64)]) -> CountryEntry {
        let indicators: CountryIndicatorSet = values
            .iter()
            .map(|(indicator, value)| (indicator.name(), *value))
            .collect();
        CountryEntry::new(name, indicators)
    }

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.add_country(
            "NOR",
            entry(
                "Norway",
                &[
                    (Indicator::LifeExpectancyAtBirth, 85.0),
                    (Indicator::TuberculosisIncidence, 50.0),
                ],
            ),
        );
        dataset.add_country(
            "TCD",
            entry("Chad", &[(Indicator::InfantMortalityRate, 140.0)]),
        );
        dataset.add_country("XKX", entry("Kosovo", &[(Indicator::HospitalBedDensity, 35.0)]));
        dataset
    }

    #[test]
    fn test_compute_scoreboard() {
        let scoreboard = compute_scoreboard(&sample_dataset(), &EngineConfig::default());

        assert_eq!(scoreboard.len(), 3);
        assert_eq!(scoreboard.get("NOR").unwrap().health_score, 95);
        assert_eq!(scoreboard.get("TCD").unwrap().health_score, 30);
        assert_eq!(scoreboard.get("XKX").unwrap().health_score, 50);
        assert_eq!(scoreboard.range, Some(ScoreRange::new(30, 95)));
        assert_eq!(scoreboard.unscored_codes(), vec!["XKX".to_string()]);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let dataset = sample_dataset();
        let config = EngineConfig::default();
        assert_eq!(compute_scoreboard(&dataset, &config), compute_scoreboard(&dataset, &config));
    }

    #[test]
    fn test_empty_dataset() {
        let scoreboard = compute_scoreboard(&Dataset::new(), &EngineConfig::default());
        assert!(scoreboard.is_empty());
        assert_eq!(scoreboard.range, None);
    }

    #[test]
    fn test_configured_neutral_score() {
        let config = EngineConfig {
            neutral_score: 0,
            ..EngineConfig::default()
        };
        let scoreboard = compute_scoreboard(&sample_dataset(), &config);
        assert_eq!(scoreboard.get("XKX").unwrap().health_score, 0);
        assert_eq!(scoreboard.range, Some(ScoreRange::new(0, 95)));
    }

    #[test]
    fn test_logic_load_and_clear() {
        let mut logic = ScoreboardLogic::default();
        assert_eq!(logic.load(&sample_dataset()), 3);
        assert_eq!(logic.data().country_count(), 3);
        assert_eq!(logic.ranking()[0].code, "NOR");
        assert_eq!(logic.band_distribution().total(), 3);

        logic.clear();
        assert_eq!(logic.data().country_count(), 0);
        assert_eq!(logic.data().range(), None);
    }

    #[test]
    fn test_score_buffer_follows_code_order() {
        let mut logic = ScoreboardLogic::default();
        logic.load(&sample_dataset());
        let data = logic.data_mut();
        data.ensure_score_buffer_ready();
        assert_eq!(data.score_codes(), ["NOR", "TCD", "XKX"]);
        assert_eq!(data.score_buffer_slice(), [95, 30, 50]);
    }

    #[test]
    fn test_load_observations_records_report() {
        let rows = vec![
            ObservationRow::new(Indicator::InfantMortalityRate.name(), "Norway", "NOR", 2.0),
            ObservationRow::new(Indicator::InfantMortalityRate.name(), "Europe", "EUR", 4.0),
        ];
        let mut logic = ScoreboardLogic::default();
        let count = logic.load_observations(&rows, IngestConfig::default().with_min_indicators(1));

        assert_eq!(count, 1);
        assert_eq!(logic.data().record("NOR").unwrap().health_score, 99);
        let report = logic.data().ingest_report().unwrap();
        assert_eq!(report.skipped_regional, 1);

        // A plain load forgets the previous ingest report
        logic.load(&Dataset::new());
        assert!(logic.data().ingest_report().is_none());
    }
}
