//! # Application errors
//!
//! One `thiserror` hierarchy for the whole surface. Lookups that find
//! nothing are *not* errors — the storage layer returns `Ok(None)` and
//! handlers decide whether that becomes a 404. `AppError` covers the
//! cases that genuinely fail a request: bad input, a missing resource the
//! handler insists on, and medium failures underneath.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A database statement failed. Carries the operation name so the log
    /// line says which store call broke, with the driver error as source.
    #[error("database error in operation '{operation}': {source}")]
    Database {
        operation: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// Malformed input to a create operation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A resource the request named does not exist.
    #[error("not found: {resource_type} with id '{id}'")]
    NotFound { resource_type: String, id: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Database error with operation context.
    pub fn database(operation: &str, source: mongodb::error::Error) -> Self {
        Self::Database {
            operation: operation.to_string(),
            source,
        }
    }

    /// Not-found error for a resource kind and the id that missed.
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::NotFound {
            resource_type: resource_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Database { operation, source } => {
                tracing::error!(
                    operation = %operation,
                    error = %source,
                    "database error"
                );
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "database error".to_string(),
                    message: "internal server error".to_string(),
                })
            }
            Self::Validation(message) => {
                tracing::warn!(message = %message, "validation error");
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: "validation error".to_string(),
                    message: message.clone(),
                })
            }
            Self::NotFound { resource_type, id } => {
                tracing::info!(
                    resource_type = %resource_type,
                    id = %id,
                    "resource not found"
                );
                HttpResponse::NotFound().json(ErrorResponse {
                    error: "not found".to_string(),
                    message: format!("{} with id '{}' not found", resource_type, id),
                })
            }
            Self::Internal(message) => {
                tracing::error!(message = %message, "internal error");
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "internal error".to_string(),
                    message: "internal server error".to_string(),
                })
            }
        }
    }
}

/// JSON body every error response carries.
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type AppResult<T> = Result<T, AppError>;

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        Self::Database {
            operation: "database_operation".to_string(),
            source: error,
        }
    }
}
