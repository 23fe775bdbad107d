//! Pollution severity scoring.
//!
//! Maps an O3 and NO2 concentration pair to a `ScoreResult`: each pollutant
//! is classified against its own breakpoint table, the worse one becomes
//! dominant, and its rank is coarsened into Low / High / Severe.
//!
//! Scoring is pure and stateless. Inputs are expected to be finite and
//! non-negative; callers validate readings before they get here.

use std::cmp::Ordering;

use crate::breakpoints::classify;
use crate::model::{
    CoarseCategory, Pollutant, PollutantDetail, PollutantDetails, ScoreResult, SubIndexCategory,
};

/// Dominant pollutant when both sub-index ranks and both raw values are equal.
///
/// Rank ties go to the larger raw concentration first; only a full tie falls
/// back to this. Downstream alert text depends on this exact ordering.
pub const TIE_BREAK_DEFAULT: Pollutant = Pollutant::No2;

/// Picks the pollutant that drives the classification.
///
/// Strictly higher rank wins. On equal rank the larger raw value wins, and
/// on equal raw values `TIE_BREAK_DEFAULT` is kept.
pub fn dominant_pollutant(no2: &PollutantDetail, o3: &PollutantDetail) -> Pollutant {
    match o3.cat.cmp(&no2.cat) {
        Ordering::Greater => Pollutant::O3,
        Ordering::Less => Pollutant::No2,
        Ordering::Equal if o3.val > no2.val => Pollutant::O3,
        Ordering::Equal if no2.val > o3.val => Pollutant::No2,
        Ordering::Equal => TIE_BREAK_DEFAULT,
    }
}

/// Scores an O3 / NO2 concentration pair (µg/m³).
///
/// `score` is `max(no2, o3)`: the raw larger concentration, not a calibrated
/// AQI. Dashboard cards show it as the headline "Index".
pub fn calculate_pollution_score(o3: f64, no2: f64) -> ScoreResult {
    let details = PollutantDetails {
        no2: PollutantDetail {
            val: no2,
            cat: classify(Pollutant::No2, no2),
        },
        o3: PollutantDetail {
            val: o3,
            cat: classify(Pollutant::O3, o3),
        },
    };

    let dominant = dominant_pollutant(&details.no2, &details.o3);
    let full_category: SubIndexCategory = details.get(dominant).cat;
    let category: CoarseCategory = full_category.coarse();

    ScoreResult {
        score: no2.max(o3),
        category,
        full_category,
        dominant_pollutant: dominant,
        details,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use CoarseCategory::{High, Low, Severe};
    use SubIndexCategory::*;

    // --- Dashboard scenarios ------------------------------------------------

    #[test]
    fn test_very_poor_no2_dominates_moderate_o3() {
        let r = calculate_pollution_score(120.0, 300.0);
        assert_eq!(r.details.no2.cat, VeryPoor);
        assert_eq!(r.details.o3.cat, Moderate);
        assert_eq!(r.dominant_pollutant, Pollutant::No2);
        assert_eq!(r.full_category, VeryPoor);
        assert_eq!(r.category, Severe);
        assert_eq!(r.score, 300.0);
    }

    #[test]
    fn test_poor_o3_dominates_moderate_no2() {
        let r = calculate_pollution_score(180.0, 150.0);
        assert_eq!(r.details.o3.cat, Poor);
        assert_eq!(r.details.no2.cat, Moderate);
        assert_eq!(r.dominant_pollutant, Pollutant::O3);
        assert_eq!(r.full_category, Poor);
        assert_eq!(r.category, High);
        assert_eq!(r.score, 180.0);
    }

    #[test]
    fn test_rank_tie_goes_to_larger_raw_value() {
        // Both Satisfactory; O3's 60 beats NO2's 50.
        let r = calculate_pollution_score(60.0, 50.0);
        assert_eq!(r.details.o3.cat, Satisfactory);
        assert_eq!(r.details.no2.cat, Satisfactory);
        assert_eq!(r.dominant_pollutant, Pollutant::O3);
        assert_eq!(r.category, Low);
        assert_eq!(r.score, 60.0);
    }

    // --- Tie-break ----------------------------------------------------------

    #[test]
    fn test_equal_raw_values_can_still_differ_in_rank() {
        // 50 is the top of O3's Good band but already Satisfactory for NO2.
        let r = calculate_pollution_score(50.0, 50.0);
        assert_eq!(r.details.o3.cat, Good);
        assert_eq!(r.details.no2.cat, Satisfactory);
        assert_eq!(r.dominant_pollutant, Pollutant::No2);
        assert_eq!(r.full_category, Satisfactory);
    }

    #[test]
    fn test_full_tie_keeps_default_pollutant() {
        let r = calculate_pollution_score(30.0, 30.0);
        assert_eq!(r.details.o3.cat, r.details.no2.cat);
        assert_eq!(r.dominant_pollutant, TIE_BREAK_DEFAULT);
        assert_eq!(r.dominant_pollutant, Pollutant::No2);
    }

    #[test]
    fn test_rank_tie_with_larger_no2_keeps_no2() {
        // Both Moderate; NO2's 170 beats O3's 110.
        let r = calculate_pollution_score(110.0, 170.0);
        assert_eq!(r.details.o3.cat, Moderate);
        assert_eq!(r.details.no2.cat, Moderate);
        assert_eq!(r.dominant_pollutant, Pollutant::No2);
    }

    #[test]
    fn test_higher_rank_wins_over_larger_raw_value() {
        // NO2 Satisfactory at 45 beats O3 Good at 48.
        let r = calculate_pollution_score(48.0, 45.0);
        assert_eq!(r.details.no2.cat, Satisfactory);
        assert_eq!(r.details.o3.cat, Good);
        assert_eq!(r.dominant_pollutant, Pollutant::No2);
        assert_eq!(r.score, 48.0);

        // O3 Poor at 170 beats NO2 Moderate at 175 despite the smaller value.
        let r = calculate_pollution_score(170.0, 175.0);
        assert_eq!(r.details.o3.cat, Poor);
        assert_eq!(r.details.no2.cat, Moderate);
        assert_eq!(r.dominant_pollutant, Pollutant::O3);
        assert_eq!(r.score, 175.0);
    }

    // --- Properties ---------------------------------------------------------

    #[test]
    fn test_score_is_max_concentration_across_grid() {
        let values = [0.0, 12.5, 40.0, 80.0, 99.9, 168.0, 250.0, 401.0, 800.0];
        for &o3 in &values {
            for &no2 in &values {
                let r = calculate_pollution_score(o3, no2);
                assert_eq!(r.score, no2.max(o3), "score for o3={} no2={}", o3, no2);
                assert_eq!(r.details.o3.val, o3);
                assert_eq!(r.details.no2.val, no2);
            }
        }
    }

    #[test]
    fn test_category_tracks_dominant_rank() {
        let values = [0.0, 45.0, 90.0, 150.0, 200.0, 350.0, 500.0, 900.0];
        for &o3 in &values {
            for &no2 in &values {
                let r = calculate_pollution_score(o3, no2);
                let dominant_rank = r.details.get(r.dominant_pollutant).cat.rank();
                let worst_rank = r.details.no2.cat.max(r.details.o3.cat).rank();
                assert_eq!(dominant_rank, worst_rank);
                assert_eq!(r.full_category.rank(), dominant_rank);
                assert_eq!(r.category, CoarseCategory::from_rank(dominant_rank));
            }
        }
    }

    #[test]
    fn test_serializes_to_dashboard_shape() {
        let r = calculate_pollution_score(120.0, 300.0);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "score": 300.0,
                "category": "Severe",
                "fullCategory": "Very Poor",
                "dominantPollutant": "NO2",
                "details": {
                    "NO2": { "val": 300.0, "cat": "Very Poor" },
                    "O3": { "val": 120.0, "cat": "Moderate" }
                }
            })
        );
    }
}
