pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{content, offer, profile};
use crate::state::AppState;

/// Build the profile route tree.
///
/// ```text
/// GET    /{profile_id}                           -> get_or_create
/// POST   /{profile_id}/{vehicle}                 -> submit_vehicle
/// GET    /{profile_id}/{room}/{box_index}        -> box_contents
/// GET    /{profile_id}/{room}/{box_index}/code   -> box_code (PNG)
/// ```
///
/// The second segment is a vehicle tier on POST and a room name on GET.
/// The router needs one parameter name per position, hence `{segment}`.
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/{profile_id}", get(profile::get_or_create))
        .route("/{profile_id}/{segment}", post(offer::submit_vehicle))
        .route(
            "/{profile_id}/{segment}/{box_index}",
            get(content::box_contents),
        )
        .route(
            "/{profile_id}/{segment}/{box_index}/code",
            get(content::box_code),
        )
}
