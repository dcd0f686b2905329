//! Facility accessibility rating.
//!
//! The rating is a pure function of average travel time and distance to the
//! nearest facility. It is recomputed on every create and update and never
//! taken from the caller.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationReport;

/// Upper bound (inclusive) on travel time for a GOOD rating, in minutes
pub const GOOD_MAX_TRAVEL_MINUTES: f64 = 15.0;
/// Upper bound (inclusive) on distance for a GOOD rating, in kilometers
pub const GOOD_MAX_DISTANCE_KM: f64 = 5.0;
/// Upper bound (inclusive) on travel time for a MODERATE rating, in minutes
pub const MODERATE_MAX_TRAVEL_MINUTES: f64 = 30.0;
/// Upper bound (inclusive) on distance for a MODERATE rating, in kilometers
pub const MODERATE_MAX_DISTANCE_KM: f64 = 10.0;

/// Accessibility rating
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccessibilityRating {
    Good,
    Moderate,
    Poor,
}

impl AccessibilityRating {
    pub fn code(&self) -> &'static str {
        match self {
            AccessibilityRating::Good => "GOOD",
            AccessibilityRating::Moderate => "MODERATE",
            AccessibilityRating::Poor => "POOR",
        }
    }
}

impl std::fmt::Display for AccessibilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Rate a facility's accessibility. First matching bucket wins:
/// - GOOD: travel time <= 15 min and distance <= 5 km
/// - MODERATE: travel time <= 30 min and distance <= 10 km
/// - POOR: otherwise
///
/// Total over all inputs; negative values fall into the GOOD bucket and NaN
/// falls through to POOR.
pub fn rate_accessibility(avg_travel_time_minutes: f64, distance_km: f64) -> AccessibilityRating {
    if avg_travel_time_minutes <= GOOD_MAX_TRAVEL_MINUTES && distance_km <= GOOD_MAX_DISTANCE_KM {
        AccessibilityRating::Good
    } else if avg_travel_time_minutes <= MODERATE_MAX_TRAVEL_MINUTES
        && distance_km <= MODERATE_MAX_DISTANCE_KM
    {
        AccessibilityRating::Moderate
    } else {
        AccessibilityRating::Poor
    }
}

/// Storage constraints on the measured inputs.
pub fn check_accessibility_measures(avg_travel_time_minutes: f64, distance_km: f64) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.require_non_negative(
        "avg_travel_time_minutes",
        "Average travel time",
        avg_travel_time_minutes,
    );
    report.require_non_negative("distance_km", "Distance to nearest facility", distance_km);
    report
}
