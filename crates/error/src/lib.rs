pub mod macros;
pub mod middleware_handling;

use async_graphql::{Error as GraphQLError, ErrorExtensions, FieldError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ConfigError(anyhow::Error),
    StoreError(anyhow::Error),
    GraphQLError(GraphQLError),
    ServerError(anyhow::Error),
    ValidationError(String),
    NotFoundError(String),
    ResourceExistsError(String),
}

impl AppError {
    // Resource errors
    pub fn resource_not_found(resource_type: &str, identifier: &str) -> Self {
        Self::NotFoundError(format!(
            "{} with identifier '{}' was not found.",
            resource_type, identifier
        ))
    }

    pub fn resource_exists(resource_type: &str, identifier: &str) -> Self {
        Self::ResourceExistsError(format!(
            "{} with identifier '{}' already exists.",
            resource_type, identifier
        ))
    }

    // Validation errors
    pub fn validation(field: &str, message: &str) -> Self {
        Self::ValidationError(format!("Validation failed for '{}': {}", field, message))
    }

    pub fn store_operation_failed(operation: &str, collection: &str) -> Self {
        Self::StoreError(anyhow::anyhow!(
            "Store operation '{}' failed on collection '{}'",
            operation,
            collection
        ))
    }

    /// Machine readable code shared by the HTTP body and GraphQL extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::StoreError(_) => "STORE_ERROR",
            Self::GraphQLError(_) => "GRAPHQL_ERROR",
            Self::ServerError(_) => "SERVER_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NotFoundError(_) => "NOT_FOUND_ERROR",
            Self::ResourceExistsError(_) => "RESOURCE_EXISTS_ERROR",
        }
    }
}

impl std::error::Error for AppError {}

// Convert from various error types to AppError
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::ServerError(error)
    }
}

impl From<GraphQLError> for AppError {
    fn from(error: GraphQLError) -> Self {
        Self::GraphQLError(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::ServerError(error.into())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(e) => write!(f, "Configuration error: {}", e),
            Self::StoreError(e) => write!(f, "Store error: {}", e),
            Self::GraphQLError(e) => write!(f, "GraphQL error: {:?}", e),
            Self::ServerError(e) => write!(f, "Server error: {}", e),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::NotFoundError(msg) => write!(f, "Not found: {}", msg),
            Self::ResourceExistsError(msg) => write!(f, "Resource exists: {}", msg),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, help_text) = match &self {
            Self::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "System configuration error",
                None,
            ),
            Self::StoreError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Record store operation failed",
                None,
            ),
            Self::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                msg.as_str(),
                Some("Please review your input and try again."),
            ),
            Self::NotFoundError(msg) => (
                StatusCode::NOT_FOUND,
                msg.as_str(),
                Some("The requested resource was not found."),
            ),
            Self::ResourceExistsError(msg) => (
                StatusCode::CONFLICT,
                msg.as_str(),
                Some("Choose a different identifier and try again."),
            ),
            Self::GraphQLError(_) | Self::ServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            ),
        };
        let error_code = self.code();

        let log_message = format!("[{}] {}: {}", error_code, status, self);
        if status.is_server_error() {
            tracing::error!(error_code = error_code, status_code = %status.as_u16(), %error_message, "{}", log_message);
        } else {
            tracing::warn!(error_code = error_code, status_code = %status.as_u16(), %error_message, "{}", log_message);
        }

        let body = Json(ErrorResponse {
            status: status.to_string(),
            message: error_message.to_string(),
            code: error_code.to_string(),
            // Internal details stay in the logs
            details: if status.is_server_error() {
                None
            } else {
                Some(self.to_string())
            },
            help: help_text.map(String::from),
        });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// Extension trait to wrap foreign errors with a specific variant
pub trait AppErrorExt<T> {
    fn config_err(self) -> AppResult<T>;
    fn store_err(self) -> AppResult<T>;
    fn server_err(self) -> AppResult<T>;
}

impl<T, E> AppErrorExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn config_err(self) -> AppResult<T> {
        self.map_err(|e| AppError::ConfigError(e.into()))
    }

    fn store_err(self) -> AppResult<T> {
        self.map_err(|e| AppError::StoreError(e.into()))
    }

    fn server_err(self) -> AppResult<T> {
        self.map_err(|e| AppError::ServerError(e.into()))
    }
}

impl AppError {
    // Convert AppError to a GraphQL FieldError with appropriate extensions
    pub fn to_field_error(&self) -> FieldError {
        let code = self.code();
        let details = match self {
            Self::ValidationError(msg)
            | Self::NotFoundError(msg)
            | Self::ResourceExistsError(msg) => msg.clone(),
            Self::StoreError(_) => "A record store error occurred".to_string(),
            Self::ConfigError(_) => "A configuration error occurred".to_string(),
            Self::ServerError(_) => "An internal server error occurred".to_string(),
            Self::GraphQLError(err) => format!("{:?}", err),
        };

        let error = FieldError::new(self.to_string()).extend_with(|_, e| {
            e.set("code", code);
            e.set("details", details);
        });

        match self {
            Self::ServerError(_) | Self::StoreError(_) | Self::ConfigError(_) => {
                tracing::error!(error = %self, "GraphQL resolver error");
            }
            Self::ValidationError(_) | Self::NotFoundError(_) | Self::ResourceExistsError(_) => {
                tracing::info!(error = %self, "Client request error");
            }
            Self::GraphQLError(_) => {
                tracing::warn!(error = %self, "GraphQL error");
            }
        }

        error
    }
}
