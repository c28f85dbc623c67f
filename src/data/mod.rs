mod compute_metric_builder;
mod observation_ingest;
mod record_builder;

pub use compute_metric_builder::ComputeMetricBuilder;
pub use observation_ingest::{DatasetBuilder, IngestReport, NumericCell, ObservationRow};
pub use record_builder::CountryRecordBuilder;

use crate::config::EngineConfig;
use crate::types::{ComputeMetrics, CountryHealthRecord, ScoreRange, Scoreboard};

/// State held between `load` calls: the last scoreboard and derived buffers
pub struct ScoreboardData {
    config: EngineConfig,
    scoreboard: Scoreboard,
    score_codes: Vec<String>,
    score_buffer: Vec<u8>,
    score_buffer_dirty: bool,
    ingest_report: Option<IngestReport>,
    metrics: ComputeMetrics,
}

impl ScoreboardData {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            scoreboard: Scoreboard::default(),
            score_codes: Vec::new(),
            score_buffer: Vec::new(),
            score_buffer_dirty: true,
            ingest_report: None,
            metrics: ComputeMetrics::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn record(&self, code: &str) -> Option<&CountryHealthRecord> {
        self.scoreboard.get(code)
    }

    pub fn range(&self) -> Option<ScoreRange> {
        self.scoreboard.range
    }

    pub fn country_count(&self) -> usize {
        self.scoreboard.len()
    }

    pub fn replace_scoreboard(&mut self, scoreboard: Scoreboard) {
        self.scoreboard = scoreboard;
        self.score_buffer_dirty = true;
    }

    pub fn ingest_report(&self) -> Option<IngestReport> {
        self.ingest_report
    }

    pub fn set_ingest_report(&mut self, report: Option<IngestReport>) {
        self.ingest_report = report;
    }

    pub fn metrics(&self) -> &ComputeMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut ComputeMetrics {
        &mut self.metrics
    }

    /// Rebuild the flat code/score buffers if the scoreboard changed
    pub fn ensure_score_buffer_ready(&mut self) {
        if !self.score_buffer_dirty {
            return;
        }
        self.score_codes.clear();
        self.score_buffer.clear();
        for (code, record) in &self.scoreboard.records {
            self.score_codes.push(code.clone());
            self.score_buffer.push(record.health_score);
        }
        self.score_buffer_dirty = false;
    }

    /// Country codes in the same order as `score_buffer_slice`
    pub fn score_codes(&self) -> &[String] {
        &self.score_codes
    }

    pub fn score_buffer_slice(&self) -> &[u8] {
        &self.score_buffer
    }

    pub fn clear(&mut self) {
        self.scoreboard = Scoreboard::default();
        self.score_codes.clear();
        self.score_buffer.clear();
        self.score_buffer_dirty = true;
        self.ingest_report = None;
        self.metrics.reset();
    }
}

impl Default for ScoreboardData {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
