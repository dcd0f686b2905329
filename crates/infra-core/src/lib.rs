//! Mycelix Health Infrastructure Core
//!
//! Pure rules shared by the integrity and coordinator zomes. Only the
//! `integrity` feature touches the HDI, so every rule can be exercised
//! natively:
//! - Accessibility rating derived from travel time and distance
//! - Population consistency (gender and age-group sums)
//! - District/sector normalization
//! - Ownership policy for updates and deletes
//! - Snapshot statistics (capacity totals, average travel time)

pub mod accessibility;
pub mod area;
pub mod error;
#[cfg(feature = "integrity")]
pub mod integrity;
pub mod kinds;
pub mod ownership;
pub mod population;
pub mod snapshot;
pub mod validation;

pub use accessibility::*;
pub use area::*;
pub use error::*;
pub use kinds::*;
pub use ownership::*;
pub use population::*;
pub use snapshot::*;
pub use validation::*;
