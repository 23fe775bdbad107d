//! Alert text drafting for critical regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dashboard::CriticalRegion;
use crate::model::{AlertError, CoarseCategory, ScoreResult};

/// Departments pre-selected as recipients on every alert card.
pub const TARGET_DEPARTMENTS: &[&str] = &[
    "Health Dept",
    "Traffic Police",
    "Education Board",
    "Industrial Control",
];

/// Forecast wording used when a region has no trend attached.
pub const DEFAULT_FORECAST_TEXT: &str = "continued high levels";

/// Dispatch severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Critical,
    High,
}

impl AlertSeverity {
    /// `Critical` for the Severe bucket, `High` for everything else.
    pub fn for_category(category: CoarseCategory) -> Self {
        match category {
            CoarseCategory::Severe => AlertSeverity::Critical,
            CoarseCategory::High | CoarseCategory::Low => AlertSeverity::High,
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Critical => write!(f, "CRITICAL"),
            AlertSeverity::High => write!(f, "HIGH"),
        }
    }
}

impl FromStr for AlertSeverity {
    type Err = AlertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(AlertError::MissingFields),
            "CRITICAL" => Ok(AlertSeverity::Critical),
            "HIGH" => Ok(AlertSeverity::High),
            other => Err(AlertError::InvalidSeverity(other.to_string())),
        }
    }
}

/// Alert text prepared for a region, before recipients are chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDraft {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    /// Monitoring site id.
    pub region: String,
}

/// Drafts an alert for a scored region.
///
/// Returns `None` for regions that came from stored reports without a
/// score result, since the text needs the category and dominant pollutant.
pub fn draft_alert(region: &CriticalRegion, region_name: &str) -> Option<AlertDraft> {
    let score = region.score.as_ref()?;
    let forecast = region
        .forecast
        .map(|f| f.to_string())
        .unwrap_or_else(|| DEFAULT_FORECAST_TEXT.to_string());

    Some(AlertDraft {
        title: format!("{} Pollution Alert: {}", score.category, region_name),
        message: format!(
            "{} air quality detected in {}. Dominant pollutant: {} (Level: {}). \
             Forecast indicates {}. Immediate action required.",
            score.full_category, region_name, score.dominant_pollutant, region.index, forecast
        ),
        severity: AlertSeverity::for_category(score.category),
        region: region.region.clone(),
    })
}

/// Per-pollutant line shown under the card description,
/// e.g. `NO2: 300 (Very Poor) | O3: 120 (Moderate)`.
pub fn breakdown_line(score: &ScoreResult) -> String {
    let d = &score.details;
    format!(
        "NO2: {} ({}) | O3: {} ({})",
        d.no2.val, d.no2.cat, d.o3.val, d.o3.cat
    )
}
