//! Profile row model.

use mudae_core::profile::Profile;
use mudae_core::types::{ProfileId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `profiles` table. The domain document lives in JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: ProfileId,
    pub document: Json<Profile>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProfileRow {
    pub fn into_profile(self) -> Profile {
        self.document.0
    }
}
