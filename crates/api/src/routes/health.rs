//! Health check endpoint.

use axum::Json;
use serde::Serialize;

use crate::SERVICE_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

impl HealthResponse {
    /// The liveness payload: `{"status": "ok", "message": "TENeT Backend is running"}`.
    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: format!("{SERVICE_NAME} Backend is running"),
        }
    }
}

/// GET /api/health — reports that the backend is up.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_payload() {
        let health = HealthResponse::ok();
        assert_eq!(health.status, "ok");
        assert_eq!(health.message, "TENeT Backend is running");
    }

    #[tokio::test]
    async fn test_check_returns_ok_payload() {
        let Json(body) = check().await;
        assert_eq!(body, HealthResponse::ok());
    }
}
