use astra::Response;
use mongodb::bson::document::ValueAccessError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Database Error: {0}")]
    DbError(String),

    /// A stored document is missing a field the page needs, or the field has the wrong type.
    #[error("Malformed listing document: field `{field}` {reason}")]
    MalformedDocument { field: String, reason: String },

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn malformed(field: &str, err: ValueAccessError) -> Self {
        let reason = match err {
            ValueAccessError::NotPresent => "is missing".to_string(),
            ValueAccessError::UnexpectedType => "has an unexpected type".to_string(),
            other => other.to_string(),
        };
        ServerError::MalformedDocument {
            field: field.to_string(),
            reason,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::DbError(_)
            | ServerError::MalformedDocument { .. }
            | ServerError::InternalError => 500,
        }
    }
}

impl From<mongodb::error::Error> for ServerError {
    fn from(err: mongodb::error::Error) -> Self {
        ServerError::DbError(err.to_string())
    }
}
