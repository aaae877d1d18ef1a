use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Energy Efficiency")]
    EnergyEfficiency,
    #[serde(rename = "Alternative Fuels")]
    AlternativeFuels,
    #[serde(rename = "Low-Carbon Economy")]
    LowCarbonEconomy,
    #[serde(rename = "Autonomous Shipping")]
    AutonomousShipping,
    #[serde(rename = "Advanced Materials")]
    AdvancedMaterials,
    #[serde(rename = "Marine Technologies")]
    MarineTechnologies,
    #[serde(rename = "Ocean Research")]
    OceanResearch,
    Robotics,
    Sustainability,
    Other,
    /// Placeholder held by a record until it has been classified.
    #[serde(rename = "Not Available")]
    Unclassified,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::EnergyEfficiency => "Energy Efficiency",
            Category::AlternativeFuels => "Alternative Fuels",
            Category::LowCarbonEconomy => "Low-Carbon Economy",
            Category::AutonomousShipping => "Autonomous Shipping",
            Category::AdvancedMaterials => "Advanced Materials",
            Category::MarineTechnologies => "Marine Technologies",
            Category::OceanResearch => "Ocean Research",
            Category::Robotics => "Robotics",
            Category::Sustainability => "Sustainability",
            Category::Other => "Other",
            Category::Unclassified => "Not Available",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluated top to bottom, first match wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::EnergyEfficiency,
        &["energy efficiency", "energy saving", "fuel efficiency"],
    ),
    (
        Category::AlternativeFuels,
        &["alternative fuel", "electrification", "battery", "lng"],
    ),
    (
        Category::LowCarbonEconomy,
        &["low carbon", "carbon neutral", "decarbonization"],
    ),
    (
        Category::AutonomousShipping,
        &["autonomous", "unmanned", "self-navigating"],
    ),
    (
        Category::AdvancedMaterials,
        &["material", "sensor", "composite", "3d printing"],
    ),
    (
        Category::MarineTechnologies,
        &["marine", "subsea", "underwater", "offshore"],
    ),
    (
        Category::OceanResearch,
        &["research", "data analytics", "oceanography"],
    ),
    (
        Category::Robotics,
        &["robot", "automation", "drone", "rov", "auv"],
    ),
    (
        Category::Sustainability,
        &["sustainability", "eco-friendly", "carbon-neutral"],
    ),
];

pub fn classify(description: &str, products_services: &str) -> Category {
    classify_with(CATEGORY_KEYWORDS, description, products_services)
}

pub fn classify_with(
    table: &[(Category, &[&str])],
    description: &str,
    products_services: &str,
) -> Category {
    let text = format!("{} {}", description, products_services).to_lowercase();

    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
