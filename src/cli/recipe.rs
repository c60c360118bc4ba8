use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use mealswipe_recipe::RecipeDraft;
use mealswipe_shared::{Cuisine, Difficulty};

/// Fields of the create-recipe form
#[derive(Args, Debug, Clone, Default)]
pub struct RecipeArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Ingredient row, repeatable and kept in order
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Instruction step, repeatable and kept in order
    #[arg(long = "instruction")]
    pub instructions: Vec<String>,

    /// Cooking time in minutes
    #[arg(long)]
    pub cooking_time: Option<u32>,

    #[arg(long)]
    pub servings: Option<u32>,

    #[arg(long, value_parser = super::cuisine_arg)]
    pub cuisine: Option<Cuisine>,

    /// Easy, Medium or Hard
    #[arg(long, value_parser = difficulty_arg)]
    pub difficulty: Option<Difficulty>,
}

impl RecipeArgs {
    /// Fill a fresh draft the way the form would be filled in.
    pub fn draft(&self) -> Result<RecipeDraft> {
        let mut draft = RecipeDraft::new();
        draft.set_name(self.name.as_str());
        draft.set_description(self.description.as_str());
        draft.set_cooking_time(self.cooking_time);
        draft.set_servings(self.servings);
        if let Some(cuisine) = self.cuisine {
            draft.set_cuisine(cuisine);
        }
        if let Some(difficulty) = self.difficulty {
            draft.set_difficulty(difficulty);
        }

        for (index, ingredient) in self.ingredients.iter().enumerate() {
            if index > 0 {
                draft.add_ingredient();
            }
            draft.update_ingredient(index, ingredient.as_str())?;
        }
        for (index, instruction) in self.instructions.iter().enumerate() {
            if index > 0 {
                draft.add_instruction();
            }
            draft.update_instruction(index, instruction.as_str())?;
        }

        Ok(draft)
    }
}

fn difficulty_arg(value: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(value.trim()).map_err(|_| format!("Unknown difficulty: {value}"))
}

/// Validate the recipe and return it as pretty JSON.
#[tracing::instrument(skip(args), fields(name = %args.name))]
pub fn recipe(args: &RecipeArgs) -> Result<String> {
    let recipe = args.draft()?.submit()?;

    Ok(serde_json::to_string_pretty(&recipe)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RecipeArgs {
        RecipeArgs {
            name: "Dal".to_string(),
            description: "Red lentils with cumin".to_string(),
            ingredients: vec!["1 cup lentils".to_string(), " 1 tsp cumin ".to_string()],
            instructions: vec!["Rinse".to_string(), "Simmer 20 minutes".to_string()],
            cuisine: Some(Cuisine::Indian),
            ..RecipeArgs::default()
        }
    }

    #[test]
    fn test_recipe_is_printed_as_json() {
        let json = recipe(&args()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "Dal");
        assert_eq!(value["cuisine"], "Indian");
        assert_eq!(value["difficulty"], "Easy");
        assert_eq!(value["ingredients"][1], "1 tsp cumin");
        assert_eq!(value["instructions"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_missing_rows_are_rejected() {
        let args = RecipeArgs {
            instructions: vec![],
            ..args()
        };

        assert!(recipe(&args).is_err());
    }

    #[test]
    fn test_difficulty_arg() {
        assert_eq!(difficulty_arg("hard"), Ok(Difficulty::Hard));
        assert!(difficulty_arg("impossible").is_err());
    }
}
