pub mod catalog;
pub mod error;
pub mod markers;
pub mod registry;
pub mod stats;
pub mod types;

pub use catalog::builtin_species;
pub use error::{Result, TrackerError};
pub use markers::{classify_age, derive_markers};
pub use registry::{Clock, IdSource, SystemClock, TreeRegistry, UuidIdSource};
pub use stats::derive_statistics;
pub use types::{
    AgeClass, GrowthRate, Marker, MonthlyCount, PlantRequest, PlantedTree, Statistics, TreeSpecies,
};
