use std::{collections::HashSet, path::Path};

use mealswipe_shared::{Cuisine, Meal, MealSlot, PriceTier};
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// The meals offered in each slot, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealCatalog {
    #[serde(default)]
    pub breakfast: Vec<Meal>,
    #[serde(default)]
    pub lunch: Vec<Meal>,
    #[serde(default)]
    pub dinner: Vec<Meal>,
}

impl MealCatalog {
    /// Build a catalog, rejecting duplicate ids within a slot.
    pub fn new(breakfast: Vec<Meal>, lunch: Vec<Meal>, dinner: Vec<Meal>) -> Result<Self> {
        let catalog = Self {
            breakfast,
            lunch,
            dinner,
        };
        catalog.validate()?;

        Ok(catalog)
    }

    pub fn meals(&self, slot: MealSlot) -> &[Meal] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;

        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MenuError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            breakfast = catalog.breakfast.len(),
            lunch = catalog.lunch.len(),
            dinner = catalog.dinner.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        for slot in MealSlot::ALL {
            let mut seen = HashSet::new();
            if let Some(meal) = self.meals(slot).iter().find(|m| !seen.insert(m.id.as_str())) {
                return Err(MenuError::DuplicateMealId {
                    slot,
                    id: meal.id.to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Built-in catalog shown when no catalog file is configured.
    pub fn sample() -> Self {
        Self {
            breakfast: vec![
                Meal::new("b1", "Avocado Toast", Cuisine::American, PriceTier::Medium)
                    .description(
                        "Whole grain toast topped with mashed avocado, cherry tomatoes, and a poached egg",
                    )
                    .image("https://images.unsplash.com/photo-1603046891744-76e6300f6869?w=500&q=80"),
                Meal::new("b2", "Greek Yogurt Bowl", Cuisine::Mediterranean, PriceTier::Low)
                    .description("Greek yogurt with honey, mixed berries, and granola")
                    .image("https://images.unsplash.com/photo-1511690656952-34342bb7c2f2?w=500&q=80"),
            ],
            lunch: vec![
                Meal::new("l1", "Chicken Caesar Salad", Cuisine::Italian, PriceTier::Medium)
                    .description(
                        "Romaine lettuce, grilled chicken, parmesan cheese, and Caesar dressing",
                    )
                    .image("https://images.unsplash.com/photo-1550304943-4f24f54ddde9?w=500&q=80"),
                Meal::new("l2", "Veggie Wrap", Cuisine::Mediterranean, PriceTier::Low)
                    .description("Whole wheat wrap with hummus, mixed vegetables, and feta cheese")
                    .image("https://images.unsplash.com/photo-1626700051175-6818013e1d4f?w=500&q=80"),
            ],
            dinner: vec![
                Meal::new("d1", "Grilled Salmon", Cuisine::American, PriceTier::High)
                    .description("Grilled salmon fillet with roasted vegetables and quinoa")
                    .image("https://images.unsplash.com/photo-1519708227418-c8fd9a32b7a2?w=500&q=80"),
                Meal::new("d2", "Vegetable Stir Fry", Cuisine::Asian, PriceTier::Medium)
                    .description(
                        "Mixed vegetables stir-fried with tofu in a savory sauce, served with rice",
                    )
                    .image("https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=500&q=80"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = MealCatalog::sample();

        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.meals(MealSlot::Breakfast)[0].id, "b1");
        assert_eq!(catalog.meals(MealSlot::Lunch).len(), 2);
        assert_eq!(catalog.meals(MealSlot::Dinner)[1].cuisine, Cuisine::Asian);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let meal = Meal::new("x", "Soup", Cuisine::Asian, PriceTier::Low);

        let err = MealCatalog::new(vec![], vec![meal.clone(), meal], vec![]).unwrap_err();

        assert!(matches!(
            err,
            MenuError::DuplicateMealId { slot: MealSlot::Lunch, ref id } if id == "x"
        ));
    }

    /// Ids only need to be unique within a slot
    #[test]
    fn test_same_id_in_different_slots() {
        let meal = Meal::new("x", "Soup", Cuisine::Asian, PriceTier::Low);

        assert!(MealCatalog::new(vec![meal.clone()], vec![meal], vec![]).is_ok());
    }

    #[test]
    fn test_missing_slots_default_to_empty() {
        let catalog = MealCatalog::from_json(
            r#"{"dinner":[{"id":"d1","name":"Tacos","cuisine":"Mexican","price":"$"}]}"#,
        )
        .unwrap();

        assert!(catalog.breakfast.is_empty());
        assert!(catalog.lunch.is_empty());
        assert_eq!(catalog.dinner[0].price, PriceTier::Low);
    }

    #[test]
    fn test_malformed_json_is_a_format_error() {
        let err = MealCatalog::from_json(r#"{"lunch":[{"id":"l1"}]}"#).unwrap_err();

        assert!(matches!(err, MenuError::CatalogFormat(_)));
    }
}
