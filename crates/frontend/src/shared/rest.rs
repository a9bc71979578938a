//! Thin transport layer shared by every entity service.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a remote operation. Nothing in this layer retries.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request never produced a response (network failure, bad request
    /// construction, CORS rejection).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// An operation that addresses an entity by id was handed a transient one.
    #[error("entity has no identifier")]
    MissingIdentifier,
}

pub(crate) fn expect_success(response: Response) -> Result<Response, RemoteError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(RemoteError::Status(response.status()))
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    response
        .json::<T>()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()))
}

/// Read a body that is allowed to be empty; `find` on a deleted entity
/// answers 2xx with no content.
pub(crate) async fn read_optional_json<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, RemoteError> {
    let text = response
        .text()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| RemoteError::Decode(e.to_string()))
}
