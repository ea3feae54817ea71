// crates/treetrack-core/src/types.rs

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthRate {
    Slow,
    Medium,
    Fast,
}

impl GrowthRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthRate::Slow => "Slow",
            GrowthRate::Medium => "Medium",
            GrowthRate::Fast => "Fast",
        }
    }
}

impl fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for GrowthRate {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(GrowthRate::Slow),
            "medium" => Ok(GrowthRate::Medium),
            "fast" => Ok(GrowthRate::Fast),
            other => Err(format!("unknown growth rate '{other}'")),
        }
    }
}

/// Reference data for one kind of tree. Catalog entries are loaded once and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSpecies {
    pub id: u32,
    pub name: String,
    pub scientific_name: String,
    pub co2_absorption_kg_per_year: f64,
    pub mature_height_m: f64,
    pub growth_rate: GrowthRate,
    pub description: String,
    pub image_url: String,
}

/// One logged planting event. Immutable once stored: no update or delete
/// path exists, the collection only grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantedTree {
    pub id: String,
    pub species_id: u32,
    pub planting_date: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub photos: Vec<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input to [`TreeRegistry::plant_tree`](crate::registry::TreeRegistry::plant_tree).
///
/// Required fields are optional here so the registry can reject an incomplete
/// request explicitly instead of storing a hole.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantRequest {
    pub species_id: Option<u32>,
    pub planting_date: Option<NaiveDate>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub owner_id: Option<String>,
}

/// Aggregate summary for one owner, consumed by the dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_trees: usize,
    pub total_co2_saved_kg: f64,
    pub certificates: usize,
    pub monthly: Vec<MonthlyCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub label: String,
    pub count: usize,
}

/// Marker shade bucket by tree age. Rendered as dark green, green, and
/// bright green respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeClass {
    Newest,
    Older,
    Oldest,
}

impl AgeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeClass::Newest => "newest",
            AgeClass::Older => "older",
            AgeClass::Oldest => "oldest",
        }
    }
}

impl fmt::Display for AgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map annotation derived from one planted-tree record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    pub age_class: AgeClass,
}
