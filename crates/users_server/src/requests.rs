//! API request types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User creation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Full-replacement update request (PUT)
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReplaceUserRequest {
    pub name: String,
    pub email: String,
}

/// Partial update request (PATCH).
///
/// An absent field means "leave unchanged". Explicit null is treated the
/// same way, matching the original API's behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PartialUpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
