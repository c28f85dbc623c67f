use thiserror::Error;

/// Failures at the JS boundary. The scoring pipeline itself cannot fail.
#[derive(Error, Debug)]
pub enum EngineError {
    /// JS value did not match the dataset contract
    #[error("invalid dataset: {0}")]
    InvalidDataset(#[source] serde_wasm_bindgen::Error),

    /// JS value was not an array of WHO observation rows
    #[error("invalid observation rows: {0}")]
    InvalidObservations(#[source] serde_wasm_bindgen::Error),

    /// JS value did not match the engine configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[source] serde_wasm_bindgen::Error),

    /// Output could not be converted to a JS value
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_wasm_bindgen::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
