use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Cuisine {
    Italian,
    Asian,
    Mexican,
    American,
    Mediterranean,
    Indian,
}

/// Price tiers are ordered from cheapest to most expensive.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum PriceTier {
    #[serde(rename = "$")]
    #[strum(to_string = "$", serialize = "low")]
    Low,
    #[default]
    #[serde(rename = "$$")]
    #[strum(to_string = "$$", serialize = "medium")]
    Medium,
    #[serde(rename = "$$$")]
    #[strum(to_string = "$$$", serialize = "high")]
    High,
}

/// A single menu entry. The image is an opaque reference that is never
/// interpreted here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cuisine: Cuisine,
    pub price: PriceTier,
    #[serde(default)]
    pub image: String,
}

impl Meal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cuisine: Cuisine,
        price: PriceTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cuisine,
            price,
            image: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
