//! [`ProfileStore`] backed by the `profiles` table.

use async_trait::async_trait;
use mudae_core::error::CoreError;
use mudae_core::profile::Profile;
use mudae_core::store::ProfileStore;
use mudae_core::types::ProfileId;

use crate::repositories::ProfileRepo;
use crate::DbPool;

#[derive(Clone)]
pub struct PgProfileStore {
    pool: DbPool,
}

impl PgProfileStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Profile store query failed");
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, CoreError> {
        let row = ProfileRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?;
        Ok(row.map(|r| r.into_profile()))
    }

    async fn create(&self, profile: &Profile) -> Result<Profile, CoreError> {
        if let Some(row) = ProfileRepo::insert_if_absent(&self.pool, profile)
            .await
            .map_err(storage_error)?
        {
            return Ok(row.into_profile());
        }

        // Lost the race to a concurrent creator: adopt the stored document.
        tracing::debug!(profile_id = profile.id, "Profile already existed on create");
        ProfileRepo::find_by_id(&self.pool, profile.id)
            .await
            .map_err(storage_error)?
            .map(|r| r.into_profile())
            .ok_or_else(|| {
                CoreError::Storage(format!(
                    "profile {} vanished between insert and read",
                    profile.id
                ))
            })
    }

    async fn upsert(&self, profile: &Profile) -> Result<Profile, CoreError> {
        let row = ProfileRepo::upsert(&self.pool, profile)
            .await
            .map_err(storage_error)?;
        Ok(row.into_profile())
    }

    async fn delete_by_id(&self, id: ProfileId) -> Result<bool, CoreError> {
        ProfileRepo::delete_by_id(&self.pool, id)
            .await
            .map_err(storage_error)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}
