//! Enumerated record attributes.
//!
//! Entries serialize these by variant name. Text queries go through
//! [`std::str::FromStr`], which accepts the registry codes (`HEALTH_CENTER`)
//! as well as snake-case or spaced spellings, ignoring case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InfraError;

/// Enums with a fixed registry code per variant.
trait Coded: Sized + Copy + 'static {
    const ALL: &'static [Self];
    const WHAT: &'static str;

    fn code(&self) -> &'static str;
}

fn squash(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn parse_coded<T: Coded>(input: &str) -> Result<T, InfraError> {
    let wanted = squash(input);
    if wanted.is_empty() {
        return Err(InfraError::validation(format!("{} is required", T::WHAT)));
    }
    T::ALL
        .iter()
        .copied()
        .find(|kind| squash(kind.code()) == wanted)
        .ok_or_else(|| InfraError::validation(format!("Invalid {} value: {}", T::WHAT, input)))
}

/// Kind of health facility
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacilityType {
    Hospital,
    Clinic,
    HealthCenter,
    Pharmacy,
}

impl Coded for FacilityType {
    const ALL: &'static [Self] = &[
        FacilityType::Hospital,
        FacilityType::Clinic,
        FacilityType::HealthCenter,
        FacilityType::Pharmacy,
    ];
    const WHAT: &'static str = "facility type";

    fn code(&self) -> &'static str {
        match self {
            FacilityType::Hospital => "HOSPITAL",
            FacilityType::Clinic => "CLINIC",
            FacilityType::HealthCenter => "HEALTH_CENTER",
            FacilityType::Pharmacy => "PHARMACY",
        }
    }
}

/// Operational status of a facility
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FacilityStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
    Closed,
}

impl Coded for FacilityStatus {
    const ALL: &'static [Self] = &[
        FacilityStatus::Active,
        FacilityStatus::Inactive,
        FacilityStatus::Maintenance,
        FacilityStatus::Closed,
    ];
    const WHAT: &'static str = "facility status";

    fn code(&self) -> &'static str {
        match self {
            FacilityStatus::Active => "ACTIVE",
            FacilityStatus::Inactive => "INACTIVE",
            FacilityStatus::Maintenance => "MAINTENANCE",
            FacilityStatus::Closed => "CLOSED",
        }
    }
}

/// Lifecycle of a disease incident
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IncidentStatus {
    #[default]
    Active,
    Resolved,
    UnderInvestigation,
    Contained,
}

impl Coded for IncidentStatus {
    const ALL: &'static [Self] = &[
        IncidentStatus::Active,
        IncidentStatus::Resolved,
        IncidentStatus::UnderInvestigation,
        IncidentStatus::Contained,
    ];
    const WHAT: &'static str = "incident status";

    fn code(&self) -> &'static str {
        match self {
            IncidentStatus::Active => "ACTIVE",
            IncidentStatus::Resolved => "RESOLVED",
            IncidentStatus::UnderInvestigation => "UNDER_INVESTIGATION",
            IncidentStatus::Contained => "CONTAINED",
        }
    }
}

/// Socioeconomic band of a (district, sector)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SocioeconomicStatus {
    Low,
    Middle,
    High,
}

impl Coded for SocioeconomicStatus {
    const ALL: &'static [Self] = &[
        SocioeconomicStatus::Low,
        SocioeconomicStatus::Middle,
        SocioeconomicStatus::High,
    ];
    const WHAT: &'static str = "socioeconomic status";

    fn code(&self) -> &'static str {
        match self {
            SocioeconomicStatus::Low => "LOW",
            SocioeconomicStatus::Middle => "MIDDLE",
            SocioeconomicStatus::High => "HIGH",
        }
    }
}

macro_rules! coded_impls {
    ($($kind:ty),* $(,)?) => {
        $(
            impl $kind {
                /// Registry code, e.g. `UNDER_INVESTIGATION`.
                pub fn code(&self) -> &'static str {
                    Coded::code(self)
                }

                pub fn all() -> &'static [Self] {
                    <Self as Coded>::ALL
                }
            }

            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(Coded::code(self))
                }
            }

            impl FromStr for $kind {
                type Err = InfraError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_coded(s)
                }
            }
        )*
    };
}

coded_impls!(FacilityType, FacilityStatus, IncidentStatus, SocioeconomicStatus);
