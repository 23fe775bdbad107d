/// Breakpoint tables for the pollution sub-index.
///
/// Each table holds five ascending concentration thresholds (µg/m³) that
/// split the real line into six intervals, one per `SubIndexCategory`.
/// Values are the CPCB bands: NO2 on a 24-hour average, O3 on an 8-hour
/// average. These are fixed reference data and are never loaded from config.

use crate::model::{Pollutant, SubIndexCategory};

/// Five ascending thresholds; index `i` is the upper bound (inclusive) of
/// the category with rank `i`.
pub type Breakpoints = [f64; 5];

/// NO2: 0-40 Good, 41-80 Satisfactory, 81-180 Moderate, 181-280 Poor,
/// 281-400 Very Poor, >400 Severe.
pub static NO2_BREAKPOINTS: Breakpoints = [40.0, 80.0, 180.0, 280.0, 400.0];

/// O3: 0-50 Good, 51-100 Satisfactory, 101-168 Moderate, 169-208 Poor,
/// 209-748 Very Poor, >748 Severe.
pub static O3_BREAKPOINTS: Breakpoints = [50.0, 100.0, 168.0, 208.0, 748.0];

pub fn breakpoints_for(pollutant: Pollutant) -> &'static Breakpoints {
    match pollutant {
        Pollutant::No2 => &NO2_BREAKPOINTS,
        Pollutant::O3 => &O3_BREAKPOINTS,
    }
}

/// Returns the category of `value` within `table`.
///
/// The rank is the index of the first threshold the value does not exceed,
/// so each boundary belongs to the lower category:
///   value <= table[0]  →  Good
///   value >  table[4]  →  Severe
pub fn sub_index(value: f64, table: &Breakpoints) -> SubIndexCategory {
    let rank = table
        .iter()
        .position(|&threshold| value <= threshold)
        .unwrap_or(table.len());
    SubIndexCategory::from_rank(rank)
}

/// `sub_index` against the pollutant's own table.
pub fn classify(pollutant: Pollutant, value: f64) -> SubIndexCategory {
    sub_index(value, breakpoints_for(pollutant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubIndexCategory::*;

    #[test]
    fn test_tables_are_strictly_ascending() {
        for table in [&NO2_BREAKPOINTS, &O3_BREAKPOINTS] {
            assert!(
                table.windows(2).all(|w| w[0] < w[1]),
                "breakpoints must ascend: {:?}",
                table
            );
        }
    }

    // --- Boundaries ---------------------------------------------------------

    #[test]
    fn test_no2_boundary_belongs_to_lower_category() {
        assert_eq!(classify(Pollutant::No2, 40.0), Good);
        assert_eq!(classify(Pollutant::No2, 40.0001), Satisfactory);
    }

    #[test]
    fn test_every_no2_threshold_is_inclusive() {
        for (rank, &threshold) in NO2_BREAKPOINTS.iter().enumerate() {
            assert_eq!(classify(Pollutant::No2, threshold).rank(), rank);
            assert_eq!(classify(Pollutant::No2, threshold + 0.5).rank(), rank + 1);
        }
    }

    #[test]
    fn test_every_o3_threshold_is_inclusive() {
        for (rank, &threshold) in O3_BREAKPOINTS.iter().enumerate() {
            assert_eq!(classify(Pollutant::O3, threshold).rank(), rank);
            assert_eq!(classify(Pollutant::O3, threshold + 0.5).rank(), rank + 1);
        }
    }

    // --- Ranges -------------------------------------------------------------

    #[test]
    fn test_zero_is_good() {
        assert_eq!(classify(Pollutant::No2, 0.0), Good);
        assert_eq!(classify(Pollutant::O3, 0.0), Good);
    }

    #[test]
    fn test_values_past_last_threshold_are_severe() {
        assert_eq!(classify(Pollutant::No2, 400.1), Severe);
        assert_eq!(classify(Pollutant::O3, 748.1), Severe);
        assert_eq!(classify(Pollutant::O3, 5_000.0), Severe);
    }

    #[test]
    fn test_same_value_differs_by_pollutant() {
        // 180 is the top of NO2's Moderate band but already Poor for O3.
        assert_eq!(classify(Pollutant::No2, 180.0), Moderate);
        assert_eq!(classify(Pollutant::O3, 180.0), Poor);
        // 300 is Very Poor for NO2 and still Very Poor for O3 (up to 748).
        assert_eq!(classify(Pollutant::No2, 300.0), VeryPoor);
        assert_eq!(classify(Pollutant::O3, 300.0), VeryPoor);
    }
}
