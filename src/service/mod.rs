use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::config::{EngineConfig, IngestConfig};
use crate::data::ObservationRow;
use crate::error::{EngineError, Result};
use crate::logic::{compute_scoreboard, ScoreboardLogic};
use crate::types::{catalog, Dataset};

/// Plain JS objects rather than `Map`s, so React can spread and index them
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(EngineError::Serialization)
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

#[wasm_bindgen]
pub struct HealthScoreEngine {
    logic: ScoreboardLogic,
    ingest_config: IngestConfig,
}

#[wasm_bindgen]
impl HealthScoreEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_engine_config(EngineConfig::default())
    }

    /// Build with a partial `EngineConfig` object; `undefined` keeps the defaults
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> std::result::Result<HealthScoreEngine, JsError> {
        if is_absent(&config) {
            return Ok(Self::new());
        }
        let config: EngineConfig =
            serde_wasm_bindgen::from_value(config).map_err(EngineError::InvalidConfig)?;
        Ok(Self::with_engine_config(config))
    }

    #[wasm_bindgen]
    pub fn set_ingest_config(&mut self, config: JsValue) -> std::result::Result<(), JsError> {
        self.ingest_config = if is_absent(&config) {
            IngestConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(EngineError::InvalidConfig)?
        };
        Ok(())
    }

    /// Score a `Dataset` object and keep the result; returns the country count
    #[wasm_bindgen]
    pub fn load(&mut self, dataset: JsValue) -> std::result::Result<usize, JsError> {
        let dataset: Dataset =
            serde_wasm_bindgen::from_value(dataset).map_err(EngineError::InvalidDataset)?;
        Ok(self.load_dataset(&dataset))
    }

    /// Score an array of WHO annex rows
    #[wasm_bindgen]
    pub fn load_observations(&mut self, rows: JsValue) -> std::result::Result<usize, JsError> {
        let rows: Vec<ObservationRow> =
            serde_wasm_bindgen::from_value(rows).map_err(EngineError::InvalidObservations)?;
        Ok(self.load_rows(&rows))
    }

    #[wasm_bindgen]
    pub fn records(&mut self) -> std::result::Result<JsValue, JsError> {
        let (result, duration) = {
            let builder = crate::data::ComputeMetricBuilder::new();
            let records = &self.logic.data().scoreboard().records;
            builder.measure(|| to_js(records))
        };
        self.logic.data_mut().metrics_mut().update_serialize(duration);
        Ok(result?)
    }

    /// One record, or `null` for an unknown code
    #[wasm_bindgen]
    pub fn record(&self, code: &str) -> std::result::Result<JsValue, JsError> {
        match self.logic.data().record(code) {
            Some(record) => Ok(to_js(record)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// `{min, max}`, or `null` when nothing is loaded
    #[wasm_bindgen]
    pub fn score_range(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_js(&self.logic.data().range())?)
    }

    #[wasm_bindgen]
    pub fn ranking(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_js(&self.logic.ranking())?)
    }

    #[wasm_bindgen]
    pub fn band_distribution(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_js(&self.logic.band_distribution())?)
    }

    #[wasm_bindgen]
    pub fn unscored_countries(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_js(&self.logic.data().scoreboard().unscored_codes())?)
    }

    /// Row counts from the last `load_observations`, or `null`
    #[wasm_bindgen]
    pub fn ingest_report(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_js(&self.logic.data().ingest_report())?)
    }

    #[wasm_bindgen]
    pub fn catalog(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_js(catalog())?)
    }

    #[wasm_bindgen]
    pub fn get_country_count(&self) -> usize {
        self.logic.data().country_count()
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn score_codes(&mut self) -> js_sys::Array {
        let data = self.logic.data_mut();
        data.ensure_score_buffer_ready();
        data.score_codes().iter().map(|code| JsValue::from_str(code)).collect()
    }

    /// Scores in the same order as `score_codes`
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn score_buffer(&mut self) -> js_sys::Uint8Array {
        let data = self.logic.data_mut();
        data.ensure_score_buffer_ready();
        js_sys::Uint8Array::from(data.score_buffer_slice())
    }

    #[wasm_bindgen]
    pub fn get_last_compute_duration(&self) -> f64 {
        self.logic.data().metrics().last_compute_duration_ms
    }

    #[wasm_bindgen]
    pub fn get_last_serialize_duration(&self) -> f64 {
        self.logic.data().metrics().last_serialize_duration_ms
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.logic.clear();
    }
}

impl HealthScoreEngine {
    pub fn with_engine_config(config: EngineConfig) -> Self {
        Self {
            logic: ScoreboardLogic::new(config),
            ingest_config: IngestConfig::default(),
        }
    }

    pub fn load_dataset(&mut self, dataset: &Dataset) -> usize {
        self.logic.load(dataset)
    }

    pub fn load_rows(&mut self, rows: &[ObservationRow]) -> usize {
        self.logic.load_observations(rows, self.ingest_config.clone())
    }

    pub fn logic(&self) -> &ScoreboardLogic {
        &self.logic
    }
}

impl Default for HealthScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless variant: `Dataset` in, `{records, range}` out
#[wasm_bindgen]
pub fn compute_health_scores(dataset: JsValue) -> std::result::Result<JsValue, JsError> {
    let dataset: Dataset =
        serde_wasm_bindgen::from_value(dataset).map_err(EngineError::InvalidDataset)?;
    let scoreboard = compute_scoreboard(&dataset, &EngineConfig::default());
    Ok(to_js(&scoreboard)?)
}
