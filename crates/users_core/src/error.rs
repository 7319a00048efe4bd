//! Store error types

use miette::Diagnostic;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("User not found")]
    #[diagnostic(
        code(users_core::user_not_found),
        help("No user with id {id} exists in the store")
    )]
    UserNotFound { id: u64 },
}
