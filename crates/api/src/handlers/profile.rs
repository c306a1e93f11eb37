//! Handlers for the profile root resource.

use axum::extract::{Path, State};
use axum::Json;
use mudae_core::profile::{parse_profile_id, Profile};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /{profile_id}
///
/// Returns the profile, seeding the default inventory on first access.
pub async fn get_or_create(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Profile>> {
    let id = parse_profile_id(&raw_id)?;
    let profile = state.service.get_or_create(id).await?;
    Ok(Json(profile))
}
