use serde::{Deserialize, Serialize};

use crate::constants::FLAT_RANGE_POSITION;

/// Lowest and highest composite score in a dataset, for legend scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub fn new(min: u8, max: u8) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Bounds in ascending order; the fields are public, so they may be swapped
    fn ordered(&self) -> (u8, u8) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    pub fn width(&self) -> u8 {
        let (lo, hi) = self.ordered();
        hi - lo
    }

    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }

    /// Position of `score` inside the range as 0.0..=1.0.
    ///
    /// A flat range has no gradient, so every score sits at the midpoint.
    pub fn position(&self, score: u8) -> f64 {
        if self.is_flat() {
            return FLAT_RANGE_POSITION;
        }
        let (lo, hi) = self.ordered();
        f64::from(score.clamp(lo, hi) - lo) / f64::from(hi - lo)
    }
}

/// Legend bands used by the world map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 5] = [
        ScoreBand::VeryHigh,
        ScoreBand::High,
        ScoreBand::Moderate,
        ScoreBand::Low,
        ScoreBand::VeryLow,
    ];

    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::VeryHigh,
            60..=79 => ScoreBand::High,
            40..=59 => ScoreBand::Moderate,
            20..=39 => ScoreBand::Low,
            _ => ScoreBand::VeryLow,
        }
    }

    /// Inclusive score bounds of the band
    pub fn bounds(self) -> (u8, u8) {
        match self {
            ScoreBand::VeryHigh => (80, 100),
            ScoreBand::High => (60, 79),
            ScoreBand::Moderate => (40, 59),
            ScoreBand::Low => (20, 39),
            ScoreBand::VeryLow => (0, 19),
        }
    }
}

/// Number of countries that fall in each band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandDistribution {
    pub very_high: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub very_low: usize,
}

impl BandDistribution {
    pub fn add(&mut self, score: u8) {
        match ScoreBand::for_score(score) {
            ScoreBand::VeryHigh => self.very_high += 1,
            ScoreBand::High => self.high += 1,
            ScoreBand::Moderate => self.moderate += 1,
            ScoreBand::Low => self.low += 1,
            ScoreBand::VeryLow => self.very_low += 1,
        }
    }

    pub fn count(&self, band: ScoreBand) -> usize {
        match band {
            ScoreBand::VeryHigh => self.very_high,
            ScoreBand::High => self.high,
            ScoreBand::Moderate => self.moderate,
            ScoreBand::Low => self.low,
            ScoreBand::VeryLow => self.very_low,
        }
    }

    pub fn total(&self) -> usize {
        ScoreBand::ALL.iter().map(|band| self.count(*band)).sum()
    }
}

impl FromIterator<u8> for BandDistribution {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut distribution = Self::default();
        for score in iter {
            distribution.add(score);
        }
        distribution
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCountry {
    pub rank: usize,
    pub code: String,
    pub name: String,
    pub health_score: u8,
}
