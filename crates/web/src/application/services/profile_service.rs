//! User profiles stored in the `profiles` table

use std::sync::Arc;

use tripmate_domain::AuthUser;
use tripmate_shared::{ProfileRow, PROFILES_TABLE};

use crate::ports::outbound::{TableError, TablePort};

#[derive(Clone)]
pub struct ProfileService {
    tables: Arc<dyn TablePort>,
}

impl ProfileService {
    pub fn new(tables: Arc<dyn TablePort>) -> Self {
        Self { tables }
    }

    pub async fn create_profile(
        &self,
        user: &AuthUser,
        access_token: Option<String>,
    ) -> Result<(), TableError> {
        let row = serde_json::to_value(ProfileRow::from(user))
            .map_err(|e| TableError::Decode(e.to_string()))?;
        self.tables.insert(PROFILES_TABLE, &row, access_token).await
    }

    pub async fn fetch_profile(
        &self,
        user: &AuthUser,
        access_token: Option<String>,
    ) -> Result<Option<ProfileRow>, TableError> {
        let rows = self
            .tables
            .select(
                PROFILES_TABLE,
                &[("id".to_string(), user.id.to_string())],
                access_token,
            )
            .await?;
        rows.into_iter()
            .next()
            .map(|row| serde_json::from_value(row).map_err(|e| TableError::Decode(e.to_string())))
            .transpose()
    }

    /// Name for the navbar: the profile's full name when there is one,
    /// otherwise whatever the auth user carries.
    pub async fn display_name(&self, user: &AuthUser, access_token: Option<String>) -> String {
        match self.fetch_profile(user, access_token).await {
            Ok(Some(ProfileRow {
                full_name: Some(name),
                ..
            })) if !name.trim().is_empty() => name.trim().to_string(),
            Ok(_) => user.display_name(),
            Err(e) => {
                tracing::warn!(error = %e, "Profile lookup failed");
                user.display_name()
            }
        }
    }
}
