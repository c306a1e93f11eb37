//! Repository for the `profiles` table.

use mudae_core::profile::Profile;
use mudae_core::types::ProfileId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::profile::ProfileRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, document, created_at, updated_at";

/// Keyed document operations over profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: ProfileId,
    ) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a profile unless the id is taken.
    ///
    /// Returns `None` when a row already existed; the existing row is left
    /// untouched.
    pub async fn insert_if_absent(
        pool: &PgPool,
        profile: &Profile,
    ) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, document)
             VALUES ($1, $2)
             ON CONFLICT (id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(profile.id)
            .bind(Json(profile))
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully replace the document for `profile.id`.
    pub async fn upsert(pool: &PgPool, profile: &Profile) -> Result<ProfileRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, document)
             VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET document = EXCLUDED.document
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(profile.id)
            .bind(Json(profile))
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a profile by id. Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: ProfileId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
