//! API error handling
//!
//! Every failure is rendered as a problem-details body:
//! `{type, title, detail, status, instance, timestamp, violations[]}`.
//! Validation failures carry per-field violations; storage internals are
//! logged but never leaked into the response.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use core_kernel::PortError;
use domain_client::ClientError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed")]
    Validation(Vec<Violation>),

    #[error("Internal server error")]
    Internal(String),
}

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// Problem-details error body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub detail: String,
    pub status: u16,
    /// Request path, filled in by [`attach_instance`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ApiError {
    /// Converts validator output into field violations
    pub fn from_validation(errors: ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| Violation {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value for {field}")),
                })
            })
            .collect();
        ApiError::Validation(violations)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, title, detail, violations) = match self {
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, "Not Found", detail, Vec::new())
            }
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "Bad Request", detail, Vec::new())
            }
            ApiError::Conflict(detail) => (StatusCode::CONFLICT, "Conflict", detail, Vec::new()),
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Validation failed".to_string(),
                violations,
            ),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ProblemDetails {
            problem_type: "about:blank".to_string(),
            title: title.to_string(),
            detail,
            status: status.as_u16(),
            instance: None,
            timestamp: Utc::now(),
            violations,
        };
        (status, Json(body)).into_response()
    }
}

/// Stamps problem-details bodies with the request path
///
/// `ApiError` is rendered before the request URI is in scope, so the
/// `instance` member is filled in here on the way out. Error responses
/// that do not carry a JSON body pass through untouched.
pub async fn attach_instance(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    if !(response.status().is_client_error() || response.status().is_server_error()) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let Ok(bytes) = to_bytes(body, usize::MAX).await else {
        return parts.status.into_response();
    };
    let Ok(mut value) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    if let Some(object) = value.as_object_mut() {
        object.insert("instance".to_string(), serde_json::Value::String(path));
    }
    parts.headers.remove(header::CONTENT_LENGTH);
    match serde_json::to_vec(&value) {
        Ok(updated) => Response::from_parts(parts, Body::from(updated)),
        Err(_) => Response::from_parts(parts, Body::from(bytes)),
    }
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::ClientNotFound(_) | ClientError::ContractNotFound(_) => {
                ApiError::NotFound(error.to_string())
            }
            ClientError::DuplicateEmail(_) | ClientError::DuplicateIdentifier(_) => {
                ApiError::Conflict(error.to_string())
            }
            ClientError::Invalid(_) | ClientError::Money(_) => {
                ApiError::BadRequest(error.to_string())
            }
            ClientError::Repository(port_error) => match port_error {
                PortError::Conflict { ref message, .. } => ApiError::Conflict(message.clone()),
                PortError::NotFound { .. } => ApiError::NotFound(port_error.to_string()),
                other => ApiError::Internal(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ClientId;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::from(ClientError::ClientNotFound(ClientId::new_v7()));
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let error = ApiError::from(ClientError::DuplicateEmail("a@b.ch".to_string()));
        assert!(matches!(error, ApiError::Conflict(_)));
    }

    #[test]
    fn test_repository_conflict_maps_to_conflict() {
        let error = ApiError::from(ClientError::Repository(PortError::conflict_on(
            "email taken",
            "email",
        )));
        assert!(matches!(error, ApiError::Conflict(_)));
    }
}
