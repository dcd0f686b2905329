//! District and sector naming.
//!
//! Every anchor and every filter goes through [`normalize_area_name`], so
//! `"Kigali "` and `"kigali"` name the same district.

use serde::{Deserialize, Serialize};

use crate::error::InfraError;

pub const AREA_REQUIRED_MESSAGE: &str = "Both district and sector parameters are required";

/// Trim, collapse internal whitespace and lowercase.
pub fn normalize_area_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case and whitespace insensitive comparison of two area names.
pub fn same_area_name(a: &str, b: &str) -> bool {
    normalize_area_name(a) == normalize_area_name(b)
}

/// Anchor text for every record in a district
pub fn district_anchor_text(district: &str) -> String {
    format!("district:{}", normalize_area_name(district))
}

/// Anchor text for every record in a sector, across districts
pub fn sector_anchor_text(sector: &str) -> String {
    format!("sector:{}", normalize_area_name(sector))
}

/// A normalized (district, sector) pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaKey {
    district: String,
    sector: String,
}

impl AreaKey {
    /// Both parts must be non-blank.
    pub fn new(district: &str, sector: &str) -> Result<Self, InfraError> {
        let district = normalize_area_name(district);
        let sector = normalize_area_name(sector);
        if district.is_empty() || sector.is_empty() {
            return Err(InfraError::validation(AREA_REQUIRED_MESSAGE));
        }
        Ok(Self { district, sector })
    }

    /// Build from query parameters where either may be absent.
    pub fn from_optional(district: Option<&str>, sector: Option<&str>) -> Result<Self, InfraError> {
        match (district, sector) {
            (Some(d), Some(s)) => Self::new(d, s),
            _ => Err(InfraError::validation(AREA_REQUIRED_MESSAGE)),
        }
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Anchor text for the (district, sector) pair
    pub fn anchor_text(&self) -> String {
        format!("area:{}::{}", self.district, self.sector)
    }

    /// Does a raw (district, sector) pair name this area?
    pub fn matches(&self, district: &str, sector: &str) -> bool {
        normalize_area_name(district) == self.district && normalize_area_name(sector) == self.sector
    }
}

impl std::fmt::Display for AreaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.district, self.sector)
    }
}
