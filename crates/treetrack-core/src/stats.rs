// crates/treetrack-core/src/stats.rs

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::warn;

use crate::types::{MonthlyCount, PlantedTree, Statistics, TreeSpecies};

/// Aggregates one owner's planted trees against the species catalog.
///
/// Pure snapshot-in, summary-out. A tree referencing a species id that is
/// not in the catalog contributes zero CO2 rather than failing; a catalog
/// entry carrying a non-finite absorption value is a data-integrity bug and
/// is excluded from the sum so one bad record cannot blank the dashboard.
pub fn derive_statistics(trees: &[PlantedTree], species: &[TreeSpecies]) -> Statistics {
    let total_trees = trees.len();

    let mut total_co2_saved_kg = 0.0;
    for tree in trees {
        let absorption = species
            .iter()
            .find(|s| s.id == tree.species_id)
            .map(|s| s.co2_absorption_kg_per_year);
        match absorption {
            Some(value) if value.is_finite() => total_co2_saved_kg += value,
            Some(value) => {
                warn!(
                    tree_id = %tree.id,
                    species_id = tree.species_id,
                    value,
                    "Excluding non-finite CO2 absorption value from total"
                );
            }
            None => {}
        }
    }

    Statistics {
        total_trees,
        total_co2_saved_kg,
        // One certificate per five trees.
        certificates: total_trees / 5,
        monthly: monthly_counts(trees),
    }
}

/// Planting counts bucketed by calendar month of `planting_date`, in
/// chronological order. Months without plantings are omitted.
fn monthly_counts(trees: &[PlantedTree]) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for tree in trees {
        let key = (tree.planting_date.year(), tree.planting_date.month());
        *buckets.entry(key).or_insert(0) += 1;
    }

    const MONTH_ABBREV: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            // month comes from a valid NaiveDate, so it is in 1..=12
            label: format!("{} {}", MONTH_ABBREV[(month - 1) as usize], year),
            count,
        })
        .collect()
}
