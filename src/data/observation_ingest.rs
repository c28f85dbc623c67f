//! WHO statistical-annex rows to the `Dataset` input contract.
//!
//! One row carries one value of one indicator for one location, possibly for
//! a sub-population (the disaggregation). Regional aggregates are skipped, and
//! when several disaggregations exist for the same country and indicator the
//! best-ranked one is kept.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::IngestConfig;
use crate::constants::NO_DATA_MARKER;
use crate::types::{CountryEntry, CountryIndicatorSet, Dataset, Indicator};

/// `NumericValue` arrives as a number or as CSV text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericCell {
    Number(f64),
    Text(String),
}

impl NumericCell {
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            NumericCell::Number(value) => *value,
            NumericCell::Text(text) => {
                let text = text.trim();
                if text.is_empty() || text.eq_ignore_ascii_case(NO_DATA_MARKER) {
                    return None;
                }
                text.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObservationRow {
    pub indicator_name: String,
    pub location: String,
    pub location_code: String,
    #[serde(default)]
    pub disaggregation: String,
    #[serde(default)]
    pub numeric_value: Option<NumericCell>,
}

impl ObservationRow {
    pub fn new(indicator_name: &str, location: &str, location_code: &str, value: f64) -> Self {
        Self {
            indicator_name: indicator_name.to_string(),
            location: location.to_string(),
            location_code: location_code.to_string(),
            disaggregation: String::new(),
            numeric_value: Some(NumericCell::Number(value)),
        }
    }

    pub fn with_disaggregation(mut self, disaggregation: &str) -> Self {
        self.disaggregation = disaggregation.to_string();
        self
    }
}

/// What happened to the rows of one ingest run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub rows_read: usize,
    pub rows_accepted: usize,
    pub skipped_regional: usize,
    pub skipped_location_code: usize,
    pub skipped_value: usize,
    /// Rows replaced by (or losing to) a better-ranked disaggregation
    pub superseded: usize,
    pub countries_kept: usize,
    pub countries_below_threshold: usize,
}

struct RankedValue {
    value: f64,
    rank: usize,
}

struct PendingCountry {
    name: String,
    values: BTreeMap<String, RankedValue>,
}

pub struct DatasetBuilder {
    config: IngestConfig,
    countries: BTreeMap<String, PendingCountry>,
    report: IngestReport,
}

impl DatasetBuilder {
    pub fn new(config: IngestConfig) -> Self {
        Self {
            config,
            countries: BTreeMap::new(),
            report: IngestReport::default(),
        }
    }

    pub fn push(&mut self, row: &ObservationRow) {
        self.report.rows_read += 1;

        let code = row.location_code.trim().to_ascii_uppercase();
        if self.config.is_excluded(&code) {
            self.report.skipped_regional += 1;
            return;
        }
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            self.report.skipped_location_code += 1;
            return;
        }
        let Some(value) = row.numeric_value.as_ref().and_then(NumericCell::parse) else {
            self.report.skipped_value += 1;
            tracing::debug!(
                location = %code,
                indicator = %row.indicator_name,
                "skipped observation without a numeric value"
            );
            return;
        };

        let rank = self.config.disaggregation_rank(&row.disaggregation);
        let country = self.countries.entry(code).or_insert_with(|| PendingCountry {
            name: row.location.trim().to_string(),
            values: BTreeMap::new(),
        });

        // Annex spellings are stored under the catalog name
        let label = row.indicator_name.trim();
        let indicator = match Indicator::from_name(label) {
            Some(known) => known.name().to_string(),
            None => label.to_string(),
        };
        match country.values.get_mut(&indicator) {
            Some(existing) if rank < existing.rank => {
                *existing = RankedValue { value, rank };
                self.report.superseded += 1;
            }
            Some(_) => self.report.superseded += 1,
            None => {
                country.values.insert(indicator, RankedValue { value, rank });
            }
        }
        self.report.rows_accepted += 1;
    }

    pub fn extend<'a, I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = &'a ObservationRow>,
    {
        for row in rows {
            self.push(row);
        }
    }

    pub fn build(self) -> (Dataset, IngestReport) {
        let mut report = self.report;
        let mut dataset = Dataset::new();
        let mut indicator_names = BTreeSet::new();

        for (code, pending) in self.countries {
            if pending.values.len() < self.config.min_indicators_per_country {
                report.countries_below_threshold += 1;
                tracing::debug!(
                    location = %code,
                    indicators = pending.values.len(),
                    "country dropped below indicator threshold"
                );
                continue;
            }

            let indicators: CountryIndicatorSet = pending
                .values
                .into_iter()
                .map(|(name, ranked)| (name, ranked.value))
                .collect();
            indicator_names.extend(indicators.iter().map(|(name, _)| name.to_string()));
            dataset.add_country(code, CountryEntry::new(pending.name, indicators));
            report.countries_kept += 1;
        }

        dataset.health_indicators = indicator_names.into_iter().collect();
        (dataset, report)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFE: &str = "Life expectancy at birth (years)";
    const INFANT: &str = "Infant mortality rate (per 1,000 live births)";

    fn builder() -> DatasetBuilder {
        DatasetBuilder::new(IngestConfig::default().with_min_indicators(0))
    }

    #[test]
    fn test_numeric_cell_parsing() {
        assert_eq!(NumericCell::Number(3.5).parse(), Some(3.5));
        assert_eq!(NumericCell::Text(" 71.2 ".to_string()).parse(), Some(71.2));
        assert_eq!(NumericCell::Text("NO DATA".to_string()).parse(), None);
        assert_eq!(NumericCell::Text(String::new()).parse(), None);
        assert_eq!(NumericCell::Text("12 [8-15]".to_string()).parse(), None);
        assert_eq!(NumericCell::Number(f64::NAN).parse(), None);
    }

    #[test]
    fn test_regional_and_malformed_codes_skipped() {
        let mut builder = builder();
        builder.push(&ObservationRow::new(LIFE, "African Region", "AFR", 64.0));
        builder.push(&ObservationRow::new(LIFE, "Global", "GLOBAL", 73.0));
        builder.push(&ObservationRow::new(LIFE, "Somewhere", "X1Z", 70.0));
        builder.push(&ObservationRow::new(LIFE, "Norway", "NOR", 83.2));

        let (dataset, report) = builder.build();
        assert_eq!(report.rows_read, 4);
        assert_eq!(report.skipped_regional, 2);
        assert_eq!(report.skipped_location_code, 1);
        assert_eq!(report.rows_accepted, 1);
        assert_eq!(dataset.country_count(), 1);
        assert_eq!(dataset.countries["NOR"].name, "Norway");
    }

    #[test]
    fn test_missing_values_skipped() {
        let mut builder = builder();
        let mut row = ObservationRow::new(LIFE, "Norway", "NOR", 0.0);
        row.numeric_value = Some(NumericCell::Text("NO DATA".to_string()));
        builder.push(&row);
        row.numeric_value = None;
        builder.push(&row);

        let (dataset, report) = builder.build();
        assert_eq!(report.skipped_value, 2);
        assert_eq!(dataset.country_count(), 0);
    }

    #[test]
    fn test_best_disaggregation_wins() {
        let mut builder = builder();
        builder.push(&ObservationRow::new(LIFE, "Chad", "TCD", 51.0).with_disaggregation("SEX_FMLE"));
        builder.push(&ObservationRow::new(LIFE, "Chad", "TCD", 53.0).with_disaggregation("BTSX"));
        builder.push(&ObservationRow::new(LIFE, "Chad", "TCD", 49.0).with_disaggregation("SEX_MLE"));
        builder.push(&ObservationRow::new(INFANT, "Chad", "TCD", 65.0).with_disaggregation("TOTAL"));
        builder.push(&ObservationRow::new(INFANT, "Chad", "TCD", 67.0).with_disaggregation("TOTAL"));

        let (dataset, report) = builder.build();
        let chad = &dataset.countries["TCD"].indicators;
        assert_eq!(chad.get(LIFE), Some(53.0));
        // Equal rank keeps the first row
        assert_eq!(chad.get(INFANT), Some(65.0));
        assert_eq!(report.superseded, 3);
        assert_eq!(report.rows_accepted, 5);
    }

    #[test]
    fn test_threshold_drops_sparse_countries() {
        let mut builder = DatasetBuilder::new(IngestConfig::default().with_min_indicators(2));
        builder.push(&ObservationRow::new(LIFE, "Norway", "NOR", 83.2));
        builder.push(&ObservationRow::new(INFANT, "Norway", "NOR", 1.8));
        builder.push(&ObservationRow::new(LIFE, "Tuvalu", "TUV", 65.0));

        let (dataset, report) = builder.build();
        assert_eq!(report.countries_kept, 1);
        assert_eq!(report.countries_below_threshold, 1);
        assert!(dataset.countries.contains_key("NOR"));
        assert!(!dataset.countries.contains_key("TUV"));
    }

    #[test]
    fn test_default_threshold_is_fifteen() {
        let mut builder = DatasetBuilder::default();
        builder.push(&ObservationRow::new(LIFE, "Norway", "NOR", 83.2));
        let (dataset, report) = builder.build();
        assert_eq!(dataset.country_count(), 0);
        assert_eq!(report.countries_below_threshold, 1);
    }

    #[test]
    fn test_indicator_list_is_sorted_and_unique() {
        let mut builder = builder();
        builder.push(&ObservationRow::new(LIFE, "Norway", "NOR", 83.2));
        builder.push(&ObservationRow::new(INFANT, "Norway", "NOR", 1.8));
        builder.push(&ObservationRow::new(LIFE, "Japan", "jpn", 84.5));

        let (dataset, _) = builder.build();
        assert_eq!(dataset.health_indicators, vec![INFANT.to_string(), LIFE.to_string()]);
        assert!(dataset.countries.contains_key("JPN"));
    }

    #[test]
    fn test_annex_labels_are_scored() {
        let rows = [
            ObservationRow::new("Maternal mortality ratio (per 100 000 live births)", "Chad", "TCD", 1_063.0),
            ObservationRow::new("Under-five mortality rate (per 1000 live births)", "Chad", "TCD", 107.0),
            ObservationRow::new(
                "Diphtheria-tetanus-pertussis (DTP3) immunization coverage among 1-year-olds (%)",
                "Chad",
                "TCD",
                52.0,
            ),
            ObservationRow::new("Tuberculosis incidence (per 100 000 population)", "Chad", "TCD", 140.0),
        ];
        let mut builder = builder();
        builder.extend(&rows);
        let (dataset, _) = builder.build();

        let chad = &dataset.countries["TCD"];
        assert_eq!(chad.indicators.value(Indicator::Dtp3Immunization), Some(52.0));
        assert_eq!(chad.indicators.value(Indicator::TuberculosisIncidence), Some(140.0));
        assert!(dataset
            .health_indicators
            .contains(&Indicator::MaternalMortalityRatio.name().to_string()));

        let composite = crate::logic::aggregate(&chad.indicators, 50);
        // (0 + 46.5 + 52 + 72) / 4
        assert_eq!(composite.scored_indicators, 4);
        assert_eq!(composite.score, 43);
    }

    #[test]
    fn test_rows_from_json() {
        let json = r#"[
            {"IndicatorName": "Life expectancy at birth (years)", "Location": "Norway",
             "LocationCode": "NOR", "Disaggregation": "BTSX", "NumericValue": "83.2"},
            {"IndicatorName": "Life expectancy at birth (years)", "Location": "Japan",
             "LocationCode": "JPN", "NumericValue": 84.5}
        ]"#;
        let rows: Vec<ObservationRow> = serde_json::from_str(json).unwrap();
        let mut builder = builder();
        builder.extend(&rows);
        let (dataset, _) = builder.build();
        assert_eq!(dataset.countries["NOR"].indicators.get(LIFE), Some(83.2));
        assert_eq!(dataset.countries["JPN"].indicators.get(LIFE), Some(84.5));
    }
}
