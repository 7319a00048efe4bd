use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// Unique identifier, assigned by the store and immutable afterwards
    pub id: u64,

    /// Display name
    pub name: String,

    /// Contact email, stored as given (no format validation)
    pub email: String,
}
