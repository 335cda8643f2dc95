// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, missing resources, etc.) or the filesystem below it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Carries the value for the `Allow` header.
    #[error("Method Not Allowed")]
    MethodNotAllowed(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::MethodNotAllowed(_) => 405,
            ServerError::Io(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
