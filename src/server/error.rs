use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use crate::utils::AuditError;

pub const GENERIC_FAILURE: &str = "Audit process failed. Please try again.";

/// JSON body of every failed request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_required: Option<bool>,
}

impl AuditError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuditError::Validation(_) => StatusCode::BAD_REQUEST,
            AuditError::SourceNotFound(_) => StatusCode::NOT_FOUND,
            AuditError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_body(&self) -> ErrorBody {
        let code_required = self.code_required().then_some(true);

        let (error, details) = match self {
            AuditError::Validation(message) => (message.clone(), None),
            AuditError::SourceNotFound(_) => (
                "Verified source code not found for this address. Please provide the contract code manually.".to_string(),
                None,
            ),
            AuditError::ExplorerUnavailable(_) => (
                "Could not fetch contract source from explorer. Please upload your Solidity code manually.".to_string(),
                Some(self.to_string()),
            ),
            AuditError::NotConfigured(_) => (self.to_string(), None),
            _ => (GENERIC_FAILURE.to_string(), Some(self.to_string())),
        };

        ErrorBody {
            error,
            details,
            code_required,
        }
    }
}

impl IntoResponse for AuditError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::info!("Request rejected: {}", self);
        }

        (status, Json(self.error_body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuditError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuditError::SourceNotFound("0x01".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuditError::ExplorerUnavailable("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AuditError::Generation("quota".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AuditError::Storage("cid".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_explorer_errors_flag_code_required() {
        let body = serde_json::to_value(AuditError::SourceNotFound("0x01".into()).error_body()).unwrap();
        assert_eq!(body["codeRequired"], true);
        assert!(body.get("details").is_none());

        let body = serde_json::to_value(AuditError::Storage("cid missing".into()).error_body()).unwrap();
        assert_eq!(body["error"], GENERIC_FAILURE);
        assert!(body.get("codeRequired").is_none());
        assert!(body["details"].as_str().unwrap().contains("cid missing"));
    }
}
