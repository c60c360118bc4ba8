use std::{collections::BTreeSet, str::FromStr};

use mealswipe_shared::{Cuisine, PriceTier};
use strum::VariantArray;

use crate::{
    error::{MenuError, Result},
    filter::FilterCriteria,
};

/// The user's preference panel: one budget tier and a set of cuisines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceFilters {
    budget: Option<PriceTier>,
    cuisines: BTreeSet<Cuisine>,
    expanded: bool,
}

impl Default for PreferenceFilters {
    fn default() -> Self {
        Self {
            budget: Some(PriceTier::Medium),
            cuisines: BTreeSet::new(),
            expanded: false,
        }
    }
}

impl PreferenceFilters {
    pub fn new(budget: Option<PriceTier>, cuisines: impl IntoIterator<Item = Cuisine>) -> Self {
        Self {
            budget,
            cuisines: cuisines.into_iter().collect(),
            expanded: false,
        }
    }

    pub fn budget_options() -> &'static [PriceTier] {
        PriceTier::VARIANTS
    }

    pub fn cuisine_options() -> &'static [Cuisine] {
        Cuisine::VARIANTS
    }

    pub fn budget(&self) -> Option<PriceTier> {
        self.budget
    }

    pub fn cuisines(&self) -> &BTreeSet<Cuisine> {
        &self.cuisines
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_budget_selected(&self, tier: PriceTier) -> bool {
        self.budget == Some(tier)
    }

    pub fn is_cuisine_selected(&self, cuisine: Cuisine) -> bool {
        self.cuisines.contains(&cuisine)
    }

    /// Select a budget tier; selecting the active tier again clears it.
    pub fn select_budget(&mut self, tier: PriceTier) {
        self.budget = if self.budget == Some(tier) {
            None
        } else {
            Some(tier)
        };
    }

    pub fn toggle_cuisine(&mut self, cuisine: Cuisine) {
        if !self.cuisines.remove(&cuisine) {
            self.cuisines.insert(cuisine);
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            budget: self.budget,
            cuisines: (!self.cuisines.is_empty()).then(|| self.cuisines.clone()),
        }
    }
}

pub fn parse_budget(value: &str) -> Result<PriceTier> {
    PriceTier::from_str(value.trim()).map_err(|_| MenuError::UnknownValue {
        kind: "budget",
        value: value.to_owned(),
    })
}

pub fn parse_cuisine(value: &str) -> Result<Cuisine> {
    Cuisine::from_str(value.trim()).map_err(|_| MenuError::UnknownValue {
        kind: "cuisine",
        value: value.to_owned(),
    })
}
