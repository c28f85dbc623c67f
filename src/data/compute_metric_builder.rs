pub struct ComputeMetricBuilder;

impl ComputeMetricBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Run `f` and report how long it took in milliseconds (0 outside the browser)
    pub fn measure<F, T>(&self, f: F) -> (T, f64)
    where
        F: FnOnce() -> T,
    {
        let started = performance_now();
        let result = f();
        let duration = started
            .zip(performance_now())
            .map_or(0.0, |(started, finished)| (finished - started).max(0.0));
        (result, duration)
    }
}

impl Default for ComputeMetricBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `performance.now()` of the hosting page, if there is one
#[cfg(target_arch = "wasm32")]
fn performance_now() -> Option<f64> {
    thread_local! {
        static PERFORMANCE: Option<web_sys::Performance> =
            web_sys::window().and_then(|window| window.performance());
    }

    PERFORMANCE.with(|performance| performance.as_ref().map(web_sys::Performance::now))
}

#[cfg(not(target_arch = "wasm32"))]
fn performance_now() -> Option<f64> {
    None
}
