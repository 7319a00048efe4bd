//! API response types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root endpoint payload describing the running API
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApiInfoResponse {
    pub version: String,
    pub description: String,
    pub documentation: String,
}

/// Confirmation returned after deleting a user
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteUserResponse {
    pub message: String,
}
