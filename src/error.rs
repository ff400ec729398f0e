//! Errors for textual planner input

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `item=quantity`, got {0:?}")]
    MissingSeparator(String),

    #[error("empty item id in {0:?}")]
    EmptyItem(String),

    #[error("invalid quantity {value:?} for {item}")]
    InvalidQuantity { item: String, value: String },

    #[error("invalid recipe index {value:?} for {item}")]
    InvalidRecipeIndex { item: String, value: String },
}
