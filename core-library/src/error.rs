use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: String, id: String },

    #[error("Missing required field(s): {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] core_runtime::Error),
}

impl LibraryError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's payload.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LibraryError::MissingFields { .. } | LibraryError::InvalidInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
