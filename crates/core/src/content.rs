//! Box content lookup and the stable box address embedded in QR codes.
//!
//! Boxes are addressed by `(profile id, room name, box index)`. The index is
//! 0-based in every path that reads or builds an address.

use url::Url;

use crate::error::CoreError;
use crate::profile::{Item, Profile};
use crate::types::ProfileId;

/// Parse a 0-based box index from a request path segment.
pub fn parse_box_index(raw: &str) -> Result<usize, CoreError> {
    raw.trim().parse().map_err(|_| {
        CoreError::InvalidArgument(format!("box index '{raw}' is not a non-negative integer"))
    })
}

/// Resolve a box address to its item list.
///
/// The first room whose name matches exactly (case-sensitive) wins.
pub fn locate<'a>(
    profile: &'a Profile,
    room: &str,
    index: usize,
) -> Result<&'a [Item], CoreError> {
    let found = profile
        .inventory
        .iter()
        .find(|r| r.name == room)
        .ok_or_else(|| CoreError::not_found("Room", room))?;

    let moving_box = found.boxes.get(index).ok_or_else(|| {
        CoreError::InvalidArgument(format!(
            "box index {index} out of range for room '{room}' ({} boxes)",
            found.boxes.len()
        ))
    })?;

    Ok(&moving_box.items)
}

/// Build the public URL of a box's content page.
///
/// Each component becomes one percent-encoded path segment appended to
/// `base`, so distinct triples always produce distinct URLs and the router
/// decodes them back to the same triple.
pub fn box_url(base: &Url, id: ProfileId, room: &str, index: usize) -> Result<Url, CoreError> {
    // Dot segments are normalized away by URL parsers and cannot be addressed.
    if room.is_empty() || room == "." || room == ".." {
        return Err(CoreError::InvalidArgument(format!(
            "room name '{room}' cannot be used in a box address"
        )));
    }

    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| {
            CoreError::InvalidArgument(format!("base URL '{base}' cannot carry a path"))
        })?
        .pop_if_empty()
        .push(&id.to_string())
        .push(room)
        .push(&index.to_string());
    Ok(url)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
