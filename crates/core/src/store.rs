//! Persistence boundary for profile documents.
//!
//! [`ProfileStore`] is implemented over PostgreSQL in `mudae-db`; the
//! [`MemoryProfileStore`] here backs tests and local runs without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::profile::Profile;
use crate::types::ProfileId;

/// Keyed document store for profiles.
///
/// All failures surface as [`CoreError::Storage`].
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, CoreError>;

    /// Insert `profile` unless a document with the same id already exists.
    ///
    /// Returns the stored document: the new one on insert, the existing one
    /// when another writer got there first.
    async fn create(&self, profile: &Profile) -> Result<Profile, CoreError>;

    /// Insert or fully replace the document keyed by `profile.id`.
    async fn upsert(&self, profile: &Profile) -> Result<Profile, CoreError>;

    /// Remove a profile. Returns `true` if a document was deleted.
    async fn delete_by_id(&self, id: ProfileId) -> Result<bool, CoreError>;

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Process-local store. Counts successful writes so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<ProfileId, Profile>>,
    writes: AtomicUsize,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents inserted or replaced so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>, CoreError> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<Profile, CoreError> {
        let mut profiles = self.profiles.write().await;
        if let Some(existing) = profiles.get(&profile.id) {
            return Ok(existing.clone());
        }
        profiles.insert(profile.id, profile.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(profile.clone())
    }

    async fn upsert(&self, profile: &Profile) -> Result<Profile, CoreError> {
        self.profiles
            .write()
            .await
            .insert(profile.id, profile.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(profile.clone())
    }

    async fn delete_by_id(&self, id: ProfileId) -> Result<bool, CoreError> {
        Ok(self.profiles.write().await.remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
