pub mod draft;
pub mod error;

pub use draft::{Recipe, RecipeDraft, RowList};
pub use error::{RecipeError, RecipeResult};

pub use mealswipe_shared::{Cuisine, Difficulty};
