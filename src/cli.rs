pub mod recipe;
pub mod show;
pub mod simulate;

use clap::Args;
use mealswipe_menu::{
    FilterCriteria, MealCatalog, PreferenceFilters,
    preferences::{parse_budget, parse_cuisine},
};
use mealswipe_shared::{Cuisine, PriceTier};

use crate::config::Config;

/// Preference flags shared by the menu commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Budget tier ($, $$, $$$ or low, medium, high); all tiers when omitted
    #[arg(long, value_parser = budget_arg)]
    pub budget: Option<PriceTier>,

    /// Cuisine to include, repeatable; all cuisines when omitted
    #[arg(long = "cuisine", value_parser = cuisine_arg)]
    pub cuisines: Vec<Cuisine>,
}

impl FilterArgs {
    pub fn preferences(&self) -> PreferenceFilters {
        PreferenceFilters::new(self.budget, self.cuisines.iter().copied())
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.preferences().criteria()
    }
}

fn budget_arg(value: &str) -> Result<PriceTier, String> {
    parse_budget(value).map_err(|e| e.to_string())
}

fn cuisine_arg(value: &str) -> Result<Cuisine, String> {
    parse_cuisine(value).map_err(|e| e.to_string())
}

/// Catalog configured in `catalog.path`, or the built-in sample.
pub fn load_catalog(config: &Config) -> anyhow::Result<MealCatalog> {
    match &config.catalog.path {
        Some(path) => Ok(MealCatalog::load(path)?),
        None => {
            tracing::info!("No catalog configured, using the sample catalog");
            Ok(MealCatalog::sample())
        }
    }
}
