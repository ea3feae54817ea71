// crates/treetrack-core/src/markers.rs

use chrono::{DateTime, NaiveTime, Utc};
use tracing::warn;

use crate::types::{AgeClass, Marker, PlantedTree};

const UNKNOWN_LOCATION: &str = "Unknown location";

/// Derives map markers for the given trees, in input order.
///
/// Age is whole days elapsed from planting-date midnight UTC to
/// `reference`, truncated. A record with a non-finite coordinate is a
/// data-integrity bug: it is logged and skipped, the rest still render.
pub fn derive_markers(trees: &[PlantedTree], reference: DateTime<Utc>) -> Vec<Marker> {
    trees
        .iter()
        .filter_map(|tree| {
            if !tree.latitude.is_finite() || !tree.longitude.is_finite() {
                warn!(
                    tree_id = %tree.id,
                    latitude = tree.latitude,
                    longitude = tree.longitude,
                    "Excluding record with non-finite coordinates from map"
                );
                return None;
            }

            let planted = tree.planting_date.and_time(NaiveTime::MIN).and_utc();
            let age_in_days = (reference - planted).num_days();

            let address = tree.address.as_deref().unwrap_or(UNKNOWN_LOCATION);
            Some(Marker {
                latitude: tree.latitude,
                longitude: tree.longitude,
                label: format!("Planted: {} at {}", tree.planting_date, address),
                age_class: classify_age(age_in_days),
            })
        })
        .collect()
}

/// Ordered decision list, first match wins. Boundaries are exclusive: a
/// tree aged exactly 365 or 730 days stays in the lower bucket.
pub fn classify_age(age_in_days: i64) -> AgeClass {
    if age_in_days > 730 {
        AgeClass::Oldest
    } else if age_in_days > 365 {
        AgeClass::Older
    } else {
        AgeClass::Newest
    }
}
