use std::path::PathBuf;

use mealswipe_shared::MealSlot;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    #[error("Duplicate meal id {id} in {slot} options")]
    DuplicateMealId { slot: MealSlot, id: String },

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

pub type Result<T, E = MenuError> = std::result::Result<T, E>;
