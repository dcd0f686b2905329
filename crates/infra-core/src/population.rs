//! Population consistency rules.
//!
//! A population record must agree with itself: the gender split and the four
//! age buckets both have to add up to the stated total. Each check only runs
//! when every count it references is present, so callers validating a
//! partial payload get the checks they can answer. Coordinators merge partial
//! updates onto the stored record before validating, which means stored
//! records are always checked in full.

use serde::{Deserialize, Serialize};

use crate::error::InfraError;
use crate::validation::ValidationReport;

pub const GENDER_SUM_MESSAGE: &str =
    "Total population must match sum of male and female population";
pub const AGE_SUM_MESSAGE: &str = "Total population must match sum of age groups";
pub const DUPLICATE_AREA_MESSAGE: &str =
    "Population data for this district and sector already exists.";

/// Head counts of a population record. `None` means "not supplied".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub total: Option<u64>,
    pub male: Option<u64>,
    pub female: Option<u64>,
    pub children_under_5: Option<u64>,
    pub youth: Option<u64>,
    pub adult: Option<u64>,
    pub elderly: Option<u64>,
}

impl PopulationCounts {
    /// Counts with every field present.
    pub fn complete(
        total: u64,
        male: u64,
        female: u64,
        children_under_5: u64,
        youth: u64,
        adult: u64,
        elderly: u64,
    ) -> Self {
        Self {
            total: Some(total),
            male: Some(male),
            female: Some(female),
            children_under_5: Some(children_under_5),
            youth: Some(youth),
            adult: Some(adult),
            elderly: Some(elderly),
        }
    }
}

/// A failed consistency check
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopulationViolation {
    /// male + female != total
    GenderSumMismatch { total: u64, sum: u64 },
    /// children_under_5 + youth + adult + elderly != total
    AgeSumMismatch { total: u64, sum: u64 },
}

impl PopulationViolation {
    pub fn message(&self) -> &'static str {
        match self {
            PopulationViolation::GenderSumMismatch { .. } => GENDER_SUM_MESSAGE,
            PopulationViolation::AgeSumMismatch { .. } => AGE_SUM_MESSAGE,
        }
    }
}

impl std::fmt::Display for PopulationViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Sum of the parts, or `None` if it does not fit in a `u64`.
fn checked_sum(parts: &[u64]) -> Option<u64> {
    parts.iter().try_fold(0u64, |acc, part| acc.checked_add(*part))
}

/// Run both consistency checks. Returns every violation found, in check order.
///
/// A sum that overflows can never equal `total` and is reported as `u64::MAX`.
pub fn validate_population(counts: &PopulationCounts) -> Vec<PopulationViolation> {
    let mut violations = Vec::new();

    if let (Some(total), Some(male), Some(female)) = (counts.total, counts.male, counts.female) {
        let sum = checked_sum(&[male, female]);
        if sum != Some(total) {
            violations.push(PopulationViolation::GenderSumMismatch {
                total,
                sum: sum.unwrap_or(u64::MAX),
            });
        }
    }

    if let (Some(total), Some(children), Some(youth), Some(adult), Some(elderly)) = (
        counts.total,
        counts.children_under_5,
        counts.youth,
        counts.adult,
        counts.elderly,
    ) {
        let sum = checked_sum(&[children, youth, adult, elderly]);
        if sum != Some(total) {
            violations.push(PopulationViolation::AgeSumMismatch {
                total,
                sum: sum.unwrap_or(u64::MAX),
            });
        }
    }

    violations
}

/// Consistency checks as a validation report.
pub fn check_population_counts(counts: &PopulationCounts) -> ValidationReport {
    let mut report = ValidationReport::new();
    for violation in validate_population(counts) {
        report.add_error("total_population", violation.message());
    }
    report
}

/// Range checks on the non-count figures.
pub fn check_population_rates(
    population_density: f64,
    unemployment_rate: f64,
    literacy_rate: f64,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.require_non_negative("population_density", "Population density", population_density);
    report.require_percentage("unemployment_rate", "Unemployment rate", unemployment_rate);
    report.require_percentage("literacy_rate", "Literacy rate", literacy_rate);
    report
}

/// Rejection for a second record in an occupied (district, sector).
pub fn duplicate_area_error() -> InfraError {
    InfraError::validation(DUPLICATE_AREA_MESSAGE)
}
