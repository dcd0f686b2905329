//! Statistics for the district/sector snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kinds::FacilityType;

/// Round half away from zero to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean travel time, rounded to two decimals. Zero when there are no values.
pub fn average_travel_time<I>(minutes: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = minutes
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), m| (sum + m, count + 1));
    if count == 0 {
        return 0.0;
    }
    round_to_hundredths(sum / count as f64)
}

/// Facilities in an area, keyed by type code (`HOSPITAL`, `HEALTH_CENTER`, ...)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacilityGrouping<T> {
    pub total_count: usize,
    pub total_capacity: u64,
    pub grouped_by_type: BTreeMap<String, Vec<T>>,
}

impl<T> Default for FacilityGrouping<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            total_capacity: 0,
            grouped_by_type: BTreeMap::new(),
        }
    }
}

impl<T> FacilityGrouping<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: FacilityType, capacity: u32, item: T) {
        self.total_count += 1;
        self.total_capacity += u64::from(capacity);
        self.grouped_by_type
            .entry(kind.code().to_string())
            .or_default()
            .push(item);
    }
}

impl<T> FromIterator<(FacilityType, u32, T)> for FacilityGrouping<T> {
    fn from_iter<I: IntoIterator<Item = (FacilityType, u32, T)>>(iter: I) -> Self {
        let mut grouping = Self::new();
        for (kind, capacity, item) in iter {
            grouping.push(kind, capacity, item);
        }
        grouping
    }
}
