//! Profile lifecycle and offer workflow.
//!
//! [`ProfileService`] is constructed with its store and distance strategy,
//! so tests swap in [`crate::store::MemoryProfileStore`] and a fake resolver
//! without touching the network or a database.

use std::sync::Arc;

use chrono::Utc;

use crate::content;
use crate::distance::DistanceResolver;
use crate::error::CoreError;
use crate::pricing::{self, VehicleType};
use crate::profile::{Item, Offer, Profile};
use crate::store::ProfileStore;
use crate::types::ProfileId;

pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
    distance: Arc<dyn DistanceResolver>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>, distance: Arc<dyn DistanceResolver>) -> Self {
        Self { store, distance }
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }

    /// Load a profile, materializing the default template on first lookup.
    ///
    /// Writes at most once per id. When two first lookups race, the store's
    /// insert-if-absent keeps the earlier document and both callers get it.
    pub async fn get_or_create(&self, id: ProfileId) -> Result<Profile, CoreError> {
        if let Some(profile) = self.store.find_by_id(id).await? {
            tracing::debug!(profile_id = id, "Loaded existing profile");
            return Ok(profile);
        }

        let seeded = Profile::seeded(id, Utc::now());
        let stored = self.store.create(&seeded).await?;
        tracing::info!(profile_id = id, "Created default profile");
        Ok(stored)
    }

    /// Price the move for `vehicle_type` and persist the resulting offer.
    ///
    /// All-or-nothing: a validation, lookup, routing or pricing failure
    /// leaves the stored offer untouched. Does not create missing profiles.
    pub async fn submit_vehicle(
        &self,
        id: ProfileId,
        vehicle_type: i64,
    ) -> Result<Offer, CoreError> {
        let vehicle = VehicleType::try_from(vehicle_type)?;

        let mut profile = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Profile", id))?;

        let distance_km = self
            .distance
            .resolve(&profile.current_address, &profile.new_address)
            .await?;
        let breakdown = pricing::price(vehicle, distance_km)?;

        profile.offer = Offer::priced(vehicle, distance_km, breakdown);
        let stored = self.store.upsert(&profile).await?;

        tracing::info!(
            profile_id = id,
            vehicle = vehicle_type,
            distance_km,
            total = stored.offer.total_value,
            "Offer priced"
        );
        Ok(stored.offer)
    }

    /// Items packed in box `index` (0-based) of the first room named `room`.
    ///
    /// Read-only; a missing profile is reported rather than created.
    pub async fn box_contents(
        &self,
        id: ProfileId,
        room: &str,
        index: usize,
    ) -> Result<Vec<Item>, CoreError> {
        let profile = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Profile", id))?;
        let items = content::locate(&profile, room, index)?;
        Ok(items.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
