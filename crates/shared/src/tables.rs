//! Rows of the provider's table API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tripmate_domain::AuthUser;

pub const PROFILES_TABLE: &str = "profiles";

/// One row of `profiles`, keyed by the auth user id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl From<&AuthUser> for ProfileRow {
    fn from(user: &AuthUser) -> Self {
        Self {
            id: *user.id.as_uuid(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
        }
    }
}
