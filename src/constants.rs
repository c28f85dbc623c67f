// Shared scoring constants

// Composite score bounds and fallback
pub const NEUTRAL_HEALTH_SCORE: u8 = 50;
pub const MIN_HEALTH_SCORE: u8 = 0;
pub const MAX_HEALTH_SCORE: u8 = 100;

// Normalized indicator bounds
pub const NORMALIZED_FLOOR: f64 = 0.0;
pub const NORMALIZED_CEILING: f64 = 100.0;

// Life expectancy (years) that saturates the normalized value
pub const LIFE_EXPECTANCY_REFERENCE_YEARS: f64 = 85.0;

// Colour-scale position used when every country shares one score
pub const FLAT_RANGE_POSITION: f64 = 0.5;

// Ingest defaults taken from the WHO annex extraction
pub const DEFAULT_MIN_INDICATORS_PER_COUNTRY: usize = 15;
pub const REGIONAL_LOCATION_CODES: [&str; 7] = ["AFR", "AMR", "EMR", "EUR", "SEAR", "WPR", "GLOBAL"];
pub const DISAGGREGATION_PRIORITY: [&str; 6] = ["NA", "BTSX", "SEX_BTSX", "TOTAL", "ALL", ""];
pub const NO_DATA_MARKER: &str = "NO DATA";
