//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Library user account.
///
/// The same record is used as request body and response; a client-supplied
/// `id` is never trusted on create. The password is stored and returned as
/// received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    /// Identity assigned by the store
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "senha")]
    pub password: Option<String>,
}

impl User {
    /// Overwrite name, email and password from `changes`; the id is kept.
    pub fn merge(&mut self, changes: User) {
        self.name = changes.name;
        self.email = changes.email;
        self.password = changes.password;
    }
}
