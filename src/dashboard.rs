/// Critical region selection for the government dashboard.
///
/// Stored pollution reports drive the dashboard when any exist. When the
/// report store is empty (fresh deployment, ingest outage) the dashboard
/// falls back to a fixed set of sample concentration pairs, scores them,
/// and lists only the High / Severe ones so the alert workflow can still
/// be exercised.
///
/// # Clock injection
/// `fallback_samples` takes `now` rather than calling `Utc::now()`, so
/// tests get stable timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logging::{self, LogSource};
use crate::model::{ForecastTrend, ScoreResult};
use crate::scoring::calculate_pollution_score;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// A stored pollution report with a precomputed headline index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionReport {
    pub id: String,
    /// Monitoring site id.
    pub region: String,
    pub index: f64,
    pub recorded_at: DateTime<Utc>,
}

/// A raw O3 / NO2 concentration pair (µg/m³) for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSample {
    pub id: String,
    /// Monitoring site id.
    pub region: String,
    pub o3: f64,
    pub no2: f64,
    pub recorded_at: DateTime<Utc>,
    pub forecast: Option<ForecastTrend>,
}

// ---------------------------------------------------------------------------
// Output type
// ---------------------------------------------------------------------------

/// A region the dashboard lists under "Critical Alerts".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalRegion {
    pub id: String,
    pub region: String,
    /// Headline "Index" on the card.
    pub index: f64,
    pub recorded_at: DateTime<Utc>,
    pub forecast: Option<ForecastTrend>,
    /// Present for scored samples; stored reports carry only an index.
    pub score: Option<ScoreResult>,
}

impl CriticalRegion {
    fn from_report(report: &PollutionReport) -> Self {
        Self {
            id: report.id.clone(),
            region: report.region.clone(),
            index: report.index,
            recorded_at: report.recorded_at,
            forecast: None,
            score: None,
        }
    }

    fn from_sample(sample: &RegionSample, score: ScoreResult) -> Self {
        Self {
            id: sample.id.clone(),
            region: sample.region.clone(),
            index: score.score,
            recorded_at: sample.recorded_at,
            forecast: sample.forecast,
            score: Some(score),
        }
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Reports whose index is strictly above `threshold`, in input order.
pub fn critical_regions_from_reports(
    reports: &[PollutionReport],
    threshold: f64,
) -> Vec<CriticalRegion> {
    reports
        .iter()
        .filter(|r| r.index > threshold)
        .map(CriticalRegion::from_report)
        .collect()
}

/// Scores each sample and keeps only High / Severe results, in input order.
pub fn critical_regions_from_samples(samples: &[RegionSample]) -> Vec<CriticalRegion> {
    samples
        .iter()
        .filter_map(|sample| {
            let score = calculate_pollution_score(sample.o3, sample.no2);
            logging::debug(
                LogSource::Scoring,
                Some(&sample.region),
                &format!(
                    "o3={} no2={} -> {} ({}, {})",
                    sample.o3,
                    sample.no2,
                    score.category,
                    score.full_category,
                    score.dominant_pollutant
                ),
            );
            score
                .category
                .is_alertable()
                .then(|| CriticalRegion::from_sample(sample, score))
        })
        .collect()
}

/// Stored reports when there are any, otherwise the scored samples.
pub fn select_critical_regions(
    reports: &[PollutionReport],
    samples: &[RegionSample],
    threshold: f64,
) -> Vec<CriticalRegion> {
    if reports.is_empty() {
        logging::warn(
            LogSource::Dashboard,
            None,
            "No stored reports, scoring fallback samples",
        );
        critical_regions_from_samples(samples)
    } else {
        critical_regions_from_reports(reports, threshold)
    }
}

/// The hand-authored sample pairs shown when no reports are stored.
///
/// One pair per coarse bucket: Severe (NO2-driven), High (O3-driven), and
/// Low (rank tie settled by raw value).
pub fn fallback_samples(now: DateTime<Utc>) -> Vec<RegionSample> {
    let sample = |id: &str, region: &str, o3: f64, no2: f64, forecast| RegionSample {
        id: id.to_string(),
        region: region.to_string(),
        o3,
        no2,
        recorded_at: now,
        forecast: Some(forecast),
    };

    vec![
        sample("sample-1", "1.0", 120.0, 300.0, ForecastTrend::Rising),
        sample("sample-2", "4.0", 180.0, 150.0, ForecastTrend::Stable),
        sample("sample-3", "6.0", 60.0, 50.0, ForecastTrend::Falling),
    ]
}

/// Mean report index rounded to the nearest integer, or `fallback` when no
/// reports exist.
pub fn average_index(reports: &[PollutionReport], fallback: u32) -> u32 {
    if reports.is_empty() {
        return fallback;
    }
    let total: f64 = reports.iter().map(|r| r.index).sum();
    (total / reports.len() as f64).round() as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
