use thiserror::Error;

use crate::draft::RowList;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No {list} row {index}, the recipe has {len}")]
    RowOutOfRange {
        list: RowList,
        index: usize,
        len: usize,
    },

    #[error("A recipe keeps at least one {0} row")]
    LastRow(RowList),
}

pub type RecipeResult<T> = Result<T, RecipeError>;
