//! HTTP client for the prediction backend
//!
//! Two endpoints: `GET /health` (bounded timeout, degrades instead of
//! erroring) and `POST /predict`. Requests are blocking and always run on a
//! worker thread, never on the UI loop.

use crate::model::{ApiStatus, PredictionRequest, PredictionResponse};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Hard deadline for the health probe.
pub const HEALTH_TIMEOUT: Duration = Duration::from_millis(2500);

/// Deadline for prediction requests; long horizons take the backend a while.
pub const PREDICT_TIMEOUT: Duration = Duration::from_secs(60);

const GENERIC_REJECTION: &str = "the prediction request was rejected by the server";

/// Failure of a prediction submission. `Display` is the user-facing message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx status; carries the backend's `detail` or a generic fallback
    #[error("{0}")]
    Rejected(String),
    /// Could not reach the backend at all
    #[error("could not reach the backend: {0}")]
    Network(String),
    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response from the backend: {0}")]
    Malformed(String),
}

#[derive(Deserialize)]
struct HealthBody {
    #[serde(default)]
    modelo_cargado: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Map a non-2xx response to the message shown to the user: the body's
/// `detail` field when present, a generic fallback otherwise.
pub fn rejection_message(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty());

    match detail {
        Some(detail) => ApiError::Rejected(detail),
        None => ApiError::Rejected(format!("{} (status {})", GENERIC_REJECTION, status)),
    }
}

/// Blocking client bound to one backend base URL.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /health`. Never errors: any failure is `Offline`.
    pub fn check_health(&self) -> ApiStatus {
        let url = format!("{}/health", self.base_url);
        let response = match self.client.get(&url).timeout(HEALTH_TIMEOUT).send() {
            Ok(r) => r,
            Err(_) => return ApiStatus::Offline,
        };

        if !response.status().is_success() {
            return ApiStatus::Offline;
        }

        // A reachable backend whose model is still loading serves health
        // but not predictions.
        match response.json::<HealthBody>() {
            Ok(body) if body.modelo_cargado => ApiStatus::Online,
            Ok(_) | Err(_) => ApiStatus::Degraded,
        }
    }

    /// Submit one prediction request.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
        let url = format!("{}/predict", self.base_url);
        let response = self
            .client
            .post(&url)
            .timeout(PREDICT_TIMEOUT)
            .json(request)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(rejection_message(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_detail_field() {
        let err = rejection_message(422, r#"{"detail": "horizonte fuera de rango"}"#);
        assert_eq!(err.to_string(), "horizonte fuera de rango");
    }

    #[test]
    fn test_rejection_without_detail_falls_back() {
        let err = rejection_message(500, r#"{"error": "boom"}"#);
        let message = err.to_string();
        assert!(message.contains("rejected"));
        assert!(message.contains("500"));
    }

    #[test]
    fn test_rejection_with_non_json_body_falls_back() {
        let err = rejection_message(502, "<html>Bad Gateway</html>");
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_rejection_with_blank_detail_falls_back() {
        let err = rejection_message(400, r#"{"detail": "   "}"#);
        assert!(err.to_string().contains("rejected"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
