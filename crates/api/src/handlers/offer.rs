//! Handlers for vehicle selection and offer pricing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mudae_core::pricing::parse_tier;
use mudae_core::profile::{parse_profile_id, Offer};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /{profile_id}/{vehicle}
///
/// Prices the move for vehicle tier 1, 2 or 3 and stores the offer.
/// The profile must already exist.
pub async fn submit_vehicle(
    State(state): State<AppState>,
    Path((raw_id, raw_vehicle)): Path<(String, String)>,
) -> AppResult<(StatusCode, Json<Offer>)> {
    let id = parse_profile_id(&raw_id)?;
    let vehicle = parse_tier(&raw_vehicle)?;
    let offer = state.service.submit_vehicle(id, vehicle).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}
