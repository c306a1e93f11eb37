//! Handlers for box contents and box QR codes.
//!
//! `GET /{profile_id}/{room}/{box_index}` answers with an HTML page for
//! browsers (the QR code target) and JSON for everything else.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use mudae_core::content::{box_url, parse_box_index};
use mudae_core::profile::{parse_profile_id, Item};
use mudae_core::types::ProfileId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::qr;
use crate::state::AppState;
use crate::views;

/// Edge length in pixels of generated QR codes.
const QR_SIZE_PX: u32 = 256;

#[derive(Debug, Serialize)]
pub struct BoxContents {
    pub profile_id: ProfileId,
    pub room: String,
    #[serde(rename = "box")]
    pub box_index: usize,
    pub items: Vec<Item>,
}

/// GET /{profile_id}/{room}/{box_index}
pub async fn box_contents(
    State(state): State<AppState>,
    Path((raw_id, room, raw_box)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let id = parse_profile_id(&raw_id)?;
    let index = parse_box_index(&raw_box)?;
    let items = state.service.box_contents(id, &room, index).await?;

    if prefers_html(&headers) {
        return Ok(views::box_page(&room, index, &items).into_response());
    }

    Ok(Json(BoxContents {
        profile_id: id,
        room,
        box_index: index,
        items,
    })
    .into_response())
}

/// GET /{profile_id}/{room}/{box_index}/code
///
/// PNG QR code pointing at the box content page. Does not check that the
/// box exists; the address alone is encoded.
pub async fn box_code(
    State(state): State<AppState>,
    Path((raw_id, room, raw_box)): Path<(String, String, String)>,
) -> AppResult<Response> {
    let id = parse_profile_id(&raw_id)?;
    let index = parse_box_index(&raw_box)?;
    let url = box_url(&state.config.public_base_url, id, &room, index)?;

    let png = qr::encode_png(url.as_str(), QR_SIZE_PX)
        .map_err(|e| AppError::InternalError(format!("QR encoding failed for {url}: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// Whether the client's `Accept` header lists `text/html`.
fn prefers_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| {
            accept
                .split(',')
                .any(|range| range.split(';').next().map(str::trim) == Some("text/html"))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn browser_accept_header_prefers_html() {
        let headers = accept("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8");
        assert!(prefers_html(&headers));
    }

    #[test]
    fn json_and_missing_accept_do_not_prefer_html() {
        assert!(!prefers_html(&accept("application/json")));
        assert!(!prefers_html(&accept("*/*")));
        assert!(!prefers_html(&HeaderMap::new()));
    }
}
