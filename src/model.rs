/// Core data types for the air quality alerting service.
///
/// This module defines the shared domain model imported by all other modules:
/// pollutants, the six-level sub-index categories and their three coarse
/// buckets, the score result handed to the dashboard, and the error types.
/// It contains no logic beyond conversions between these types.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Pollutants
// ---------------------------------------------------------------------------

/// A pollutant scored by the classifier. Concentrations are in µg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "O3")]
    O3,
}

impl Pollutant {
    pub fn code(self) -> &'static str {
        match self {
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// CPCB-style sub-index category, in ascending order of severity.
///
/// The discriminant is the sub-index rank (0–5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubIndexCategory {
    Good = 0,
    Satisfactory = 1,
    Moderate = 2,
    Poor = 3,
    #[serde(rename = "Very Poor")]
    VeryPoor = 4,
    Severe = 5,
}

impl SubIndexCategory {
    /// All categories, indexed by rank.
    pub const ALL: [SubIndexCategory; 6] = [
        SubIndexCategory::Good,
        SubIndexCategory::Satisfactory,
        SubIndexCategory::Moderate,
        SubIndexCategory::Poor,
        SubIndexCategory::VeryPoor,
        SubIndexCategory::Severe,
    ];

    /// Category for a rank. Ranks past the end saturate at `Severe`.
    pub fn from_rank(rank: usize) -> Self {
        Self::ALL[rank.min(Self::ALL.len() - 1)]
    }

    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            SubIndexCategory::Good => "Good",
            SubIndexCategory::Satisfactory => "Satisfactory",
            SubIndexCategory::Moderate => "Moderate",
            SubIndexCategory::Poor => "Poor",
            SubIndexCategory::VeryPoor => "Very Poor",
            SubIndexCategory::Severe => "Severe",
        }
    }

    /// Collapses the six levels into the three buckets the dashboard shows:
    /// {Good, Satisfactory} → Low, {Moderate, Poor} → High,
    /// {Very Poor, Severe} → Severe.
    pub fn coarse(self) -> CoarseCategory {
        CoarseCategory::from_rank(self.rank())
    }
}

impl fmt::Display for SubIndexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank at or above which the coarse bucket is `Severe`.
pub const SEVERE_RANK_CUTOFF: usize = 4;

/// Rank at or above which the coarse bucket is `High`.
pub const HIGH_RANK_CUTOFF: usize = 2;

/// Three-level simplification used for badges and alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CoarseCategory {
    Low,
    High,
    Severe,
}

impl CoarseCategory {
    pub fn from_rank(rank: usize) -> Self {
        if rank >= SEVERE_RANK_CUTOFF {
            CoarseCategory::Severe
        } else if rank >= HIGH_RANK_CUTOFF {
            CoarseCategory::High
        } else {
            CoarseCategory::Low
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CoarseCategory::Low => "Low",
            CoarseCategory::High => "High",
            CoarseCategory::Severe => "Severe",
        }
    }

    /// Whether the dashboard lists a region in this bucket as critical.
    pub fn is_alertable(self) -> bool {
        matches!(self, CoarseCategory::High | CoarseCategory::Severe)
    }
}

impl fmt::Display for CoarseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Score result
// ---------------------------------------------------------------------------

/// One pollutant's raw concentration and its own category, regardless of
/// which pollutant ends up dominant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantDetail {
    pub val: f64,
    pub cat: SubIndexCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantDetails {
    #[serde(rename = "NO2")]
    pub no2: PollutantDetail,
    #[serde(rename = "O3")]
    pub o3: PollutantDetail,
}

impl PollutantDetails {
    pub fn get(&self, pollutant: Pollutant) -> &PollutantDetail {
        match pollutant {
            Pollutant::No2 => &self.no2,
            Pollutant::O3 => &self.o3,
        }
    }
}

/// Output of `scoring::calculate_pollution_score`.
///
/// Serializes to the shape the dashboard consumes:
/// `{ score, category, fullCategory, dominantPollutant, details: { NO2, O3 } }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// `max(no2, o3)`. A raw concentration, not a calibrated AQI.
    pub score: f64,
    pub category: CoarseCategory,
    pub full_category: SubIndexCategory,
    pub dominant_pollutant: Pollutant,
    pub details: PollutantDetails,
}

// ---------------------------------------------------------------------------
// Forecast
// ---------------------------------------------------------------------------

/// Short-term trend attached to a region by the forecast model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastTrend {
    Rising,
    Stable,
    Falling,
}

impl fmt::Display for ForecastTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastTrend::Rising => write!(f, "Rising"),
            ForecastTrend::Stable => write!(f, "Stable"),
            ForecastTrend::Falling => write!(f, "Falling"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading service configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(String),
    /// The file is not valid TOML or does not match the expected schema.
    Parse(String),
    /// The file parsed but holds values the service cannot run with.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config read error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while turning a drafted alert into a dispatchable request.
#[derive(Debug, PartialEq)]
pub enum AlertError {
    /// Title, message, severity, or every recipient was empty.
    MissingFields,
    /// Severity was present but is not `CRITICAL` or `HIGH`.
    InvalidSeverity(String),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::MissingFields => write!(f, "Missing required fields"),
            AlertError::InvalidSeverity(s) => write!(f, "Invalid alert severity: {}", s),
        }
    }
}

impl std::error::Error for AlertError {}
