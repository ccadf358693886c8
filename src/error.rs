use thiserror::Error;

#[derive(Debug, Error)]
pub enum CateringError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An ingredient merge would mix base units (e.g. weight into volume).
    #[error("Unit family mismatch: existing line is in {existing}, incoming quantity is in {incoming}")]
    UnitFamilyMismatch { existing: String, incoming: String },

    #[error("Order line not found: {0}")]
    LineNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Cooking item not found: {0}")]
    CookingItemNotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, CateringError>;
