// crates/treetrack-core/src/registry.rs

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::catalog::builtin_species;
use crate::error::{Result, TrackerError};
use crate::types::{PlantRequest, PlantedTree, TreeSpecies};

/// Source of "now" for `created_at` stamps and age derivation. Injected so
/// the pipeline stays deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mints planted-tree record ids. Ids must be unique within the process.
pub trait IdSource: Send + Sync {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Owns the immutable species catalog and the append-only list of planted
/// trees. Records are never edited or removed once stored; queries hand out
/// insertion-order snapshots, so a derivation never iterates a collection
/// that a later plant could grow under it.
pub struct TreeRegistry {
    species: Vec<TreeSpecies>,
    trees: Vec<PlantedTree>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
}

impl std::fmt::Debug for TreeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeRegistry")
            .field("species", &self.species)
            .field("trees", &self.trees)
            .finish_non_exhaustive()
    }
}

impl TreeRegistry {
    /// Registry over the built-in catalog with wall-clock time and UUID ids.
    pub fn new() -> Self {
        // The built-in catalog is known-good, so this cannot fail.
        Self::with_parts(builtin_species(), Box::new(SystemClock), Box::new(UuidIdSource))
            .unwrap_or_else(|err| panic!("built-in species catalog rejected: {err}"))
    }

    /// Registry over an explicit catalog, clock, and id source. Rejects
    /// catalog entries with duplicate ids or malformed numeric attributes so
    /// the statistics path never meets a non-finite absorption value from
    /// its own catalog.
    pub fn with_parts(
        species: Vec<TreeSpecies>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdSource>,
    ) -> Result<Self> {
        Self::validate_catalog(&species)?;
        Ok(Self {
            species,
            trees: Vec::new(),
            clock,
            ids,
        })
    }

    /// Full catalog, in catalog definition order.
    pub fn list_species(&self) -> &[TreeSpecies] {
        &self.species
    }

    /// Exact-match catalog lookup. Absent for unknown ids, never an error:
    /// statistics derivation relies on graceful absence.
    pub fn species_by_id(&self, id: u32) -> Option<&TreeSpecies> {
        self.species.iter().find(|s| s.id == id)
    }

    /// Validates the request, assigns a fresh id and `created_at`, appends,
    /// and returns the stored record. A rejected request leaves the registry
    /// untouched. Duplicate plantings (same owner, date, location) are
    /// permitted.
    pub fn plant_tree(&mut self, request: PlantRequest) -> Result<PlantedTree> {
        let species_id = Self::required(request.species_id, "species_id")?;
        let planting_date = Self::required(request.planting_date, "planting_date")?;
        let latitude = Self::required(request.latitude, "latitude")?;
        let longitude = Self::required(request.longitude, "longitude")?;
        let owner_id = Self::required(request.owner_id, "owner_id")?;

        Self::validate_coordinate(latitude, "latitude")?;
        Self::validate_coordinate(longitude, "longitude")?;

        if self.species_by_id(species_id).is_none() {
            return Err(TrackerError::Validation(format!(
                "plant request references unknown species id {species_id}"
            )));
        }

        let tree = PlantedTree {
            id: self.ids.next_id(),
            species_id,
            planting_date,
            latitude,
            longitude,
            address: request.address,
            notes: request.notes,
            photos: request.photos,
            owner_id,
            created_at: self.clock.now(),
        };

        info!(
            tree_id = %tree.id,
            owner_id = %tree.owner_id,
            species_id = tree.species_id,
            "Registered planting"
        );

        self.trees.push(tree.clone());
        Ok(tree)
    }

    /// All records for one owner, insertion order, as an owned snapshot.
    pub fn trees_for_owner(&self, owner_id: &str) -> Vec<PlantedTree> {
        self.trees
            .iter()
            .filter(|tree| tree.owner_id == owner_id)
            .cloned()
            .collect()
    }

    /// The entire collection, insertion order, as an owned snapshot.
    pub fn all_trees(&self) -> Vec<PlantedTree> {
        self.trees.clone()
    }
}

// Private validation helpers.
impl TreeRegistry {
    fn required<T>(value: Option<T>, field: &str) -> Result<T> {
        value.ok_or_else(|| {
            TrackerError::Validation(format!("plant request missing required field '{field}'"))
        })
    }

    fn validate_coordinate(value: f64, field: &str) -> Result<()> {
        if !value.is_finite() {
            return Err(TrackerError::Validation(format!(
                "plant request field '{field}' is not a finite number"
            )));
        }
        Ok(())
    }

    fn validate_catalog(species: &[TreeSpecies]) -> Result<()> {
        for (index, entry) in species.iter().enumerate() {
            if species[..index].iter().any(|other| other.id == entry.id) {
                return Err(TrackerError::Computation(format!(
                    "species catalog contains duplicate id {}",
                    entry.id
                )));
            }
            if !entry.co2_absorption_kg_per_year.is_finite()
                || entry.co2_absorption_kg_per_year <= 0.0
            {
                return Err(TrackerError::Computation(format!(
                    "species {} has invalid CO2 absorption {}",
                    entry.id, entry.co2_absorption_kg_per_year
                )));
            }
            if !entry.mature_height_m.is_finite() || entry.mature_height_m <= 0.0 {
                return Err(TrackerError::Computation(format!(
                    "species {} has invalid mature height {}",
                    entry.id, entry.mature_height_m
                )));
            }
        }
        Ok(())
    }
}

impl Default for TreeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
