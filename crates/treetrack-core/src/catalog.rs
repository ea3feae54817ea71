// crates/treetrack-core/src/catalog.rs

use crate::types::{GrowthRate, TreeSpecies};

/// The built-in species catalog. Order here is the order `list_species`
/// reports.
pub fn builtin_species() -> Vec<TreeSpecies> {
    vec![
        TreeSpecies {
            id: 1,
            name: "Neem".to_string(),
            scientific_name: "Azadirachta indica".to_string(),
            co2_absorption_kg_per_year: 30.0,
            mature_height_m: 20.0,
            growth_rate: GrowthRate::Fast,
            description: "Medicinal and air purifying tree native to India".to_string(),
            image_url: "assets/images/neem.jpg".to_string(),
        },
        TreeSpecies {
            id: 2,
            name: "Banyan".to_string(),
            scientific_name: "Ficus benghalensis".to_string(),
            co2_absorption_kg_per_year: 80.0,
            mature_height_m: 25.0,
            growth_rate: GrowthRate::Medium,
            description: "National tree of India, provides extensive shade".to_string(),
            image_url: "assets/images/banyan.jpg".to_string(),
        },
        TreeSpecies {
            id: 3,
            name: "Mango".to_string(),
            scientific_name: "Mangifera indica".to_string(),
            co2_absorption_kg_per_year: 45.0,
            mature_height_m: 18.0,
            growth_rate: GrowthRate::Medium,
            description: "Fruit-bearing tree with excellent carbon absorption".to_string(),
            image_url: "assets/images/mango.jpg".to_string(),
        },
        TreeSpecies {
            id: 4,
            name: "Oak".to_string(),
            scientific_name: "Quercus robur".to_string(),
            co2_absorption_kg_per_year: 60.0,
            mature_height_m: 30.0,
            growth_rate: GrowthRate::Slow,
            description: "Long-lived hardwood tree, excellent for wildlife".to_string(),
            image_url: "assets/images/oak.jpg".to_string(),
        },
        TreeSpecies {
            id: 5,
            name: "Pine".to_string(),
            scientific_name: "Pinus sylvestris".to_string(),
            co2_absorption_kg_per_year: 40.0,
            mature_height_m: 25.0,
            growth_rate: GrowthRate::Fast,
            description: "Evergreen conifer, excellent air purifier".to_string(),
            image_url: "assets/images/pine.jpg".to_string(),
        },
    ]
}
