use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::indicator::Indicator;

/// Raw indicator values for one country, keyed by indicator name.
///
/// Absence is the only "no data" state: `null` and non-finite values are
/// dropped on the way in so they behave exactly like a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CountryIndicatorSet(BTreeMap<String, f64>);

impl CountryIndicatorSet {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a raw value; non-finite values are ignored
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        if value.is_finite() {
            self.0.insert(name.into(), value);
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Value for a catalog indicator, if the country reports it
    pub fn value(&self, indicator: Indicator) -> Option<f64> {
        self.get(indicator.name())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<'de> Deserialize<'de> for CountryIndicatorSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<f64>>::deserialize(deserializer)?;
        let total = raw.len();
        let values: BTreeMap<String, f64> = raw
            .into_iter()
            .filter_map(|(name, value)| value.filter(|v| v.is_finite()).map(|v| (name, v)))
            .collect();
        if values.len() < total {
            tracing::debug!(dropped = total - values.len(), "dropped empty indicator values");
        }
        Ok(Self(values))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CountryIndicatorSet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    #[serde(default)]
    pub indicators: CountryIndicatorSet,
}

impl CountryEntry {
    pub fn new(name: impl Into<String>, indicators: CountryIndicatorSet) -> Self {
        Self {
            name: name.into(),
            indicators,
        }
    }
}

/// Input contract supplied by the dataset provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Informational list of indicator names; scoring reads the catalog instead
    #[serde(default)]
    pub health_indicators: Vec<String>,
    #[serde(default)]
    pub countries: BTreeMap<String, CountryEntry>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_country(&mut self, code: impl Into<String>, entry: CountryEntry) {
        self.countries.insert(code.into(), entry);
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}
