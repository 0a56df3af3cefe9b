// 🗺️ Dataset Registry - City → CSV file mapping
// Built once at startup from the configured data directory

use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ============================================================================
// CITY
// ============================================================================

/// City - which service area's dataset to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of this city's dataset within the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Match a user-supplied city name. Input must already be lowercased;
    /// whitespace is ignored on both sides so "new york city" and
    /// "newyorkcity" both resolve.
    pub fn parse(input: &str) -> Option<City> {
        let squashed: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        City::ALL
            .into_iter()
            .find(|city| city.name().replace(' ', "") == squashed)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// DatasetRegistry - resolves each city to its backing CSV file
///
/// Constructed in main from the --data-dir option and passed down. Every
/// city is registered up front, so lookups cannot miss.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    paths: HashMap<City, PathBuf>,
}

impl DatasetRegistry {
    /// Register the standard dataset files under `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let paths = City::ALL
            .into_iter()
            .map(|city| (city, data_dir.join(city.file_name())))
            .collect();
        DatasetRegistry { paths }
    }

    /// Path of the CSV backing `city`
    pub fn path_for(&self, city: City) -> &Path {
        &self.paths[&city]
    }
}

// ============================================================================
// TESTS
// ============================================================================
