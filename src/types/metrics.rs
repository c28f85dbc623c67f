#[derive(Clone, Copy, Debug, Default)]
pub struct ComputeMetrics {
    pub last_compute_duration_ms: f64,
    pub last_serialize_duration_ms: f64,
}

impl ComputeMetrics {
    pub fn update_compute(&mut self, duration: f64) {
        if duration >= 0.0 {
            self.last_compute_duration_ms = duration;
        }
    }

    pub fn update_serialize(&mut self, duration: f64) {
        if duration >= 0.0 {
            self.last_serialize_duration_ms = duration;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
