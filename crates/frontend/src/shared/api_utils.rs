//! API utilities for console-backend communication
//!
//! Provides the base URL, JSON request helpers and the error type every API
//! client function returns.

use crate::shared::config::API_PORT;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response (offline, DNS, CORS, server down)
    #[error("network request failed: {0}")]
    Network(String),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Text suitable for a snackbar description or an inline error block
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "The console could not reach the server. Check your connection and try again."
                    .to_string()
            }
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Status { status, .. } => format!("Request failed with status {status}"),
            ApiError::Decode(_) => "The server returned an unexpected response".to_string(),
        }
    }
}

/// Get the base URL for API requests
///
/// Built from the current window location, using `API_PORT` for the API server.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub async fn get_json<O: DeserializeOwned>(path: &str) -> Result<O, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

pub async fn post_json<I, O>(path: &str, body: &I) -> Result<O, ApiError>
where
    I: Serialize,
    O: DeserializeOwned,
{
    let response = send_post(path, body).await?;
    decode(response).await
}

/// POST whose response body is ignored
pub async fn post_unit<I: Serialize>(path: &str, body: &I) -> Result<(), ApiError> {
    let response = send_post(path, body).await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(())
}

async fn send_post<I: Serialize>(path: &str, body: &I) -> Result<Response, ApiError> {
    Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn decode<O: DeserializeOwned>(response: Response) -> Result<O, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<O>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: error_message(&body),
    }
}

/// Extracts `message` from a JSON error body, or returns the body as is
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_message() {
        assert_eq!(error_message(r#"{"message":"detection not found"}"#), "detection not found");
        assert_eq!(error_message(" upstream timeout \n"), "upstream timeout");
        assert_eq!(error_message(r#"{"code":3}"#), r#"{"code":3}"#);
    }

    #[test]
    fn test_user_message() {
        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Request failed with status 500");
        assert!(ApiError::Network("offline".into()).is_network());
        assert!(!err.is_network());
    }
}
