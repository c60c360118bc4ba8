use mealswipe_shared::{Cuisine, Difficulty};
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};
use validator::{Validate, ValidationError};

use crate::error::{RecipeError, RecipeResult};

/// The two editable row lists of a recipe form.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum RowList {
    Ingredient,
    Instruction,
}

/// A submitted recipe, trimmed and ready to share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time_min: Option<u32>,
    pub servings: Option<u32>,
    pub cuisine: Cuisine,
    pub difficulty: Difficulty,
}

/// State of the create-recipe form.
///
/// Ingredient and instruction lists always hold at least one row; a new
/// draft starts with one blank row in each.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RecipeDraft {
    #[validate(custom(function = "validate_not_blank", message = "Please enter a recipe name"))]
    name: String,

    #[validate(custom(function = "validate_not_blank", message = "Please enter a description"))]
    description: String,

    #[validate(custom(function = "validate_rows", message = "Please fill in all ingredients"))]
    ingredients: Vec<String>,

    #[validate(custom(function = "validate_rows", message = "Please fill in all instructions"))]
    instructions: Vec<String>,

    #[validate(range(min = 1, message = "Cooking time must be at least 1 minute"))]
    cooking_time_min: Option<u32>,

    #[validate(range(min = 1, message = "Servings must be at least 1"))]
    servings: Option<u32>,

    cuisine: Cuisine,
    difficulty: Difficulty,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            ingredients: vec![String::new()],
            instructions: vec![String::new()],
            cooking_time_min: None,
            servings: None,
            cuisine: Cuisine::American,
            difficulty: Difficulty::Easy,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

fn validate_rows(rows: &[String]) -> Result<(), ValidationError> {
    if rows.is_empty() || rows.iter().any(|row| row.trim().is_empty()) {
        return Err(ValidationError::new("blank_row"));
    }

    Ok(())
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cuisine_options() -> &'static [Cuisine] {
        Cuisine::VARIANTS
    }

    pub fn difficulty_options() -> &'static [Difficulty] {
        Difficulty::VARIANTS
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn cuisine(&self) -> Cuisine {
        self.cuisine
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_cooking_time(&mut self, minutes: Option<u32>) {
        self.cooking_time_min = minutes;
    }

    pub fn set_servings(&mut self, servings: Option<u32>) {
        self.servings = servings;
    }

    pub fn set_cuisine(&mut self, cuisine: Cuisine) {
        self.cuisine = cuisine;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Append a blank ingredient row and return its index.
    pub fn add_ingredient(&mut self) -> usize {
        self.add_row(RowList::Ingredient)
    }

    pub fn update_ingredient(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> RecipeResult<()> {
        self.update_row(RowList::Ingredient, index, value.into())
    }

    pub fn remove_ingredient(&mut self, index: usize) -> RecipeResult<String> {
        self.remove_row(RowList::Ingredient, index)
    }

    /// Append a blank instruction step and return its index.
    pub fn add_instruction(&mut self) -> usize {
        self.add_row(RowList::Instruction)
    }

    pub fn update_instruction(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> RecipeResult<()> {
        self.update_row(RowList::Instruction, index, value.into())
    }

    pub fn remove_instruction(&mut self, index: usize) -> RecipeResult<String> {
        self.remove_row(RowList::Instruction, index)
    }

    /// Validate the draft and hand out the trimmed recipe. On success the
    /// form is cleared for the next recipe; cuisine and difficulty stay
    /// selected. A failed submit leaves the draft untouched.
    pub fn submit(&mut self) -> RecipeResult<Recipe> {
        self.validate()
            .map_err(|e| RecipeError::ValidationError(e.to_string()))?;

        let trimmed = |rows: &[String]| -> Vec<String> {
            rows.iter().map(|row| row.trim().to_owned()).collect()
        };

        let recipe = Recipe {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            ingredients: trimmed(&self.ingredients),
            instructions: trimmed(&self.instructions),
            cooking_time_min: self.cooking_time_min,
            servings: self.servings,
            cuisine: self.cuisine,
            difficulty: self.difficulty,
        };

        tracing::info!(
            name = %recipe.name,
            ingredients = recipe.ingredients.len(),
            instructions = recipe.instructions.len(),
            "Recipe submitted"
        );

        self.reset();

        Ok(recipe)
    }

    /// Clear the text fields and rows, keeping the cuisine and difficulty.
    pub fn reset(&mut self) {
        *self = Self {
            cuisine: self.cuisine,
            difficulty: self.difficulty,
            ..Self::default()
        };
    }

    fn rows_mut(&mut self, list: RowList) -> &mut Vec<String> {
        match list {
            RowList::Ingredient => &mut self.ingredients,
            RowList::Instruction => &mut self.instructions,
        }
    }

    fn add_row(&mut self, list: RowList) -> usize {
        let rows = self.rows_mut(list);
        rows.push(String::new());

        rows.len() - 1
    }

    fn update_row(&mut self, list: RowList, index: usize, value: String) -> RecipeResult<()> {
        let rows = self.rows_mut(list);
        let len = rows.len();
        let row = rows
            .get_mut(index)
            .ok_or(RecipeError::RowOutOfRange { list, index, len })?;
        *row = value;

        Ok(())
    }

    fn remove_row(&mut self, list: RowList, index: usize) -> RecipeResult<String> {
        let rows = self.rows_mut(list);
        let len = rows.len();
        if index >= len {
            return Err(RecipeError::RowOutOfRange { list, index, len });
        }
        if len == 1 {
            return Err(RecipeError::LastRow(list));
        }

        Ok(rows.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.set_name("Shakshuka");
        draft.set_description("Eggs poached in spiced tomato sauce");
        draft.update_ingredient(0, "4 eggs").unwrap();
        draft.add_ingredient();
        draft.update_ingredient(1, "1 can tomatoes").unwrap();
        draft.update_instruction(0, "Simmer the sauce").unwrap();
        draft
    }

    #[test]
    fn test_new_draft_has_one_blank_row_each() {
        let draft = RecipeDraft::new();

        assert_eq!(draft.ingredients(), [""]);
        assert_eq!(draft.instructions(), [""]);
        assert_eq!(draft.cuisine(), Cuisine::American);
        assert_eq!(draft.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let mut draft = RecipeDraft::new();

        assert!(matches!(
            draft.remove_ingredient(0),
            Err(RecipeError::LastRow(RowList::Ingredient))
        ));
        assert!(matches!(
            draft.remove_instruction(0),
            Err(RecipeError::LastRow(RowList::Instruction))
        ));
        assert_eq!(draft.ingredients().len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_of_other_rows() {
        let mut draft = filled();
        draft.add_ingredient();
        draft.update_ingredient(2, "1 onion").unwrap();

        assert_eq!(draft.remove_ingredient(1).unwrap(), "1 can tomatoes");
        assert_eq!(draft.ingredients(), ["4 eggs", "1 onion"]);
    }

    #[test]
    fn test_out_of_range_rows() {
        let mut draft = RecipeDraft::new();

        assert!(matches!(
            draft.update_instruction(3, "Stir"),
            Err(RecipeError::RowOutOfRange {
                list: RowList::Instruction,
                index: 3,
                len: 1
            })
        ));
        assert!(matches!(
            draft.remove_ingredient(1),
            Err(RecipeError::RowOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validation_reports_each_missing_field() {
        let draft = RecipeDraft::new();

        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("ingredients"));
        assert!(fields.contains_key("instructions"));
    }

    #[test]
    fn test_whitespace_only_fields_are_blank() {
        let mut draft = filled();
        draft.set_name("   ");
        draft.add_instruction();

        let errors = draft.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("instructions"));
        assert!(!fields.contains_key("ingredients"));
    }

    #[test]
    fn test_zero_servings_is_invalid() {
        let mut draft = filled();
        draft.set_servings(Some(0));

        assert!(draft.validate().is_err());

        draft.set_servings(Some(2));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_submit_trims_and_resets() {
        let mut draft = filled();
        draft.set_name("  Shakshuka ");
        draft.set_cuisine(Cuisine::Mediterranean);
        draft.set_difficulty(Difficulty::Medium);
        draft.set_cooking_time(Some(25));

        let recipe = draft.submit().unwrap();

        assert_eq!(recipe.name, "Shakshuka");
        assert_eq!(recipe.ingredients, vec!["4 eggs", "1 can tomatoes"]);
        assert_eq!(recipe.cooking_time_min, Some(25));
        assert_eq!(recipe.cuisine, Cuisine::Mediterranean);

        assert_eq!(draft.name(), "");
        assert_eq!(draft.ingredients(), [""]);
        assert_eq!(draft.instructions(), [""]);
        assert_eq!(draft.cuisine(), Cuisine::Mediterranean);
        assert_eq!(draft.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_failed_submit_keeps_the_draft() {
        let mut draft = filled();
        draft.set_description("");
        let before = draft.clone();

        assert!(matches!(draft.submit(), Err(RecipeError::ValidationError(_))));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_option_lists() {
        assert_eq!(RecipeDraft::cuisine_options().len(), 6);
        assert_eq!(
            RecipeDraft::difficulty_options(),
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
    }
}
