//! Users core library
//!
//! In-memory user store with monotonic id assignment. No HTTP, no async;
//! the server crate wraps this behind a lock and an axum router.

pub mod error;
pub mod store;
pub mod user;

pub use error::{StoreError, StoreResult};
pub use store::UserStore;
pub use user::User;
