// Bikeshare Explorer - Core Library
// Exposes all modules for use by the CLI binary and the integration tests

pub mod app;
pub mod filters;
pub mod loader;
pub mod model;
pub mod prompt;
pub mod registry;
pub mod reports;
pub mod viewer;

// Re-export commonly used types
pub use filters::{DayFilter, FilterSelection, MonthFilter};
pub use loader::load_table;
pub use model::{RawTrip, Trip, TripTable};
pub use registry::{City, DatasetRegistry};
pub use reports::{BirthYearStats, DurationStats, StationStats, TimeStats, UserStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Section separator used across the console output
pub const RULE: &str = "----------------------------------------";
