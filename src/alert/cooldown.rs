/// Alert cooldown detection.
///
/// Once a region has been alerted, the dashboard disables its alert button
/// for a cooldown window (12 hours by default) so departments are not
/// spammed with repeats of the same episode.
///
/// # Clock injection
/// All functions accept a `now: DateTime<Utc>` parameter rather than calling
/// `Utc::now()` internally. This keeps cooldown checks deterministic in
/// tests without mocking or time manipulation.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// A previously submitted alert, as far as cooldown cares.
#[derive(Debug, Clone, PartialEq)]
pub struct SentAlert {
    /// Monitoring site id; `None` for alerts not tied to a site.
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Cooldown check
// ---------------------------------------------------------------------------

/// Returns `true` if an alert sent at `last_sent` still holds its region in
/// cooldown at `now`.
///
/// The window edge is inclusive:
///   now - last_sent <= window  →  in cooldown
///   now - last_sent >  window  →  alertable again
///
/// A window too large to represent reaches back past the earliest
/// timestamp, so every alert counts as in cooldown.
pub fn in_cooldown_at(last_sent: DateTime<Utc>, window_hours: i64, now: DateTime<Utc>) -> bool {
    let window_start = Duration::try_hours(window_hours).and_then(|w| now.checked_sub_signed(w));
    match window_start {
        Some(start) => last_sent >= start,
        None => true,
    }
}

/// Convenience wrapper that uses the real current time.
/// Use `in_cooldown_at` in tests to keep them deterministic.
pub fn in_cooldown(last_sent: DateTime<Utc>, window_hours: i64) -> bool {
    in_cooldown_at(last_sent, window_hours, Utc::now())
}

/// Regions with at least one alert inside the cooldown window at `now`.
/// Alerts without a region are ignored.
pub fn alerted_regions_at(
    alerts: &[SentAlert],
    window_hours: i64,
    now: DateTime<Utc>,
) -> HashSet<String> {
    alerts
        .iter()
        .filter(|a| in_cooldown_at(a.created_at, window_hours, now))
        .filter_map(|a| a.region.clone())
        .filter(|r| !r.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
