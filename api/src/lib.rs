//! Shared API payload types for the backend and its home page client.
//!
//! This crate owns the JSON bodies exchanged over the two status endpoints so
//! `server` and `client` cannot drift apart on field names or route paths.


use serde::{Deserialize, Serialize};

/// Route serving [`HealthInfo`].
pub const HEALTH_PATH: &str = "/api/health";

/// Route serving [`IntegrationMessage`].
pub const MESSAGE_PATH: &str = "/api/message";

/// Body of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInfo {
    /// Coarse service state; `"healthy"` when the backend is up.
    pub status: String,
    /// Human-readable detail line.
    pub message: String,
}

/// Body of `GET /api/message`: the greeting shown by the home page once the
/// frontend is wired up to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationMessage {
    pub message: String,
}
