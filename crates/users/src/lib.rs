pub mod store;

pub use store::UserStore;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Body of a create request. Both fields are required but checked by the
/// store so that a missing field is a validation error, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of an update request; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),
    #[error("A user with email '{0}' already exists")]
    Conflict(String),
    #[error("User {0} not found")]
    NotFound(u64),
}
