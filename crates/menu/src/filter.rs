use std::collections::BTreeSet;

use mealswipe_shared::{Cuisine, Meal, PriceTier};
use serde::{Deserialize, Serialize};

/// Active preference criteria. A missing criterion matches every meal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub budget: Option<PriceTier>,
    #[serde(default)]
    pub cuisines: Option<BTreeSet<Cuisine>>,
}

impl FilterCriteria {
    /// Criteria that match every meal.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn budget(mut self, budget: PriceTier) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn cuisines(mut self, cuisines: impl IntoIterator<Item = Cuisine>) -> Self {
        self.cuisines = Some(cuisines.into_iter().collect());
        self
    }

    /// Check a single meal against both predicates.
    ///
    /// An empty cuisine set behaves like an absent one, so clearing every
    /// cuisine never hides the whole menu.
    pub fn matches(&self, meal: &Meal) -> bool {
        let budget_match = self.budget.is_none_or(|budget| meal.price == budget);
        let cuisine_match = match &self.cuisines {
            Some(cuisines) if !cuisines.is_empty() => cuisines.contains(&meal.cuisine),
            _ => true,
        };

        budget_match && cuisine_match
    }
}

/// Filters a slot's catalog down to the meals matching `criteria`.
///
/// # Business Rules
/// - **AND Logic**: a meal must satisfy both the budget and the cuisine predicate
/// - **Order**: the result keeps the catalog order
/// - **Empty cuisine set**: treated as "no cuisine preference"
///
/// # Examples
/// ```
/// use mealswipe_menu::filter::{FilterCriteria, filter};
/// use mealswipe_shared::{Cuisine, Meal, PriceTier};
///
/// let catalog = vec![
///     Meal::new("b1", "Avocado Toast", Cuisine::American, PriceTier::Medium),
///     Meal::new("b2", "Greek Yogurt Bowl", Cuisine::Mediterranean, PriceTier::Low),
/// ];
///
/// let filtered = filter(&catalog, &FilterCriteria::any().budget(PriceTier::Medium));
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].id, "b1");
/// ```
pub fn filter(catalog: &[Meal], criteria: &FilterCriteria) -> Vec<Meal> {
    catalog
        .iter()
        .filter(|meal| criteria.matches(meal))
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter`].
pub fn filter_view<'a>(catalog: &'a [Meal], criteria: &FilterCriteria) -> Vec<&'a Meal> {
    catalog
        .iter()
        .filter(|meal| criteria.matches(meal))
        .collect()
}

/// Length of the filtered view without materializing it.
pub fn view_len(catalog: &[Meal], criteria: &FilterCriteria) -> usize {
    catalog.iter().filter(|meal| criteria.matches(meal)).count()
}

/// The `index`-th meal of the filtered view.
pub fn nth_match<'a>(
    catalog: &'a [Meal],
    criteria: &FilterCriteria,
    index: usize,
) -> Option<&'a Meal> {
    catalog.iter().filter(|meal| criteria.matches(meal)).nth(index)
}
