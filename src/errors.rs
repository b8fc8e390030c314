use core::fmt;
use std::sync::PoisonError;

use serde::Serialize;

/// A single rejected input field, reported back to the caller as `{field, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Validation(Vec<FieldError>),
    NotFound(String),
    RouteNotFound,
    MethodNotAllowed,
    Unexpected(String),
}

impl AppError {
    /// True for failures caused by the server rather than the request.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Parse(_) | AppError::Unexpected(_)
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err)
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        AppError::Unexpected(format!("Storage lock poisoned: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Unexpected(format!("Storage task failed: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Parse(e) => {
                write!(f, "Invalid JSON data: {}", e)
            }
            AppError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Validation failed for: {}", fields.join(", "))
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::RouteNotFound => write!(f, "Route Not found"),
            AppError::MethodNotAllowed => write!(f, "Method not allowed"),
            AppError::Unexpected(msg) => {
                write!(f, "Unexpected error: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Parse(e) => Some(e),
            _ => None,
        }
    }
}
