//! Profile document model and the default template seeded on first lookup.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pricing::{PriceBreakdown, VehicleType};
use crate::types::{ProfileId, Timestamp};

/// A household's moving record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub inventory: Vec<Room>,
    pub current_address: Address,
    pub new_address: Address,
    pub moving_date: NaiveDate,
    pub moving_time: NaiveTime,
    pub offer: Offer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Display label; not unique within an inventory.
    pub name: String,
    pub boxes: Vec<MovingBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingBox {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub quantity: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Street and number are display-only; distance resolution reads the coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// The priced quote for a move. Every field except the tier is derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub vehicle_type: Option<VehicleType>,
    pub distance_km: f64,
    pub labour_value: f64,
    pub km_value: f64,
    pub total_value: f64,
}

impl Offer {
    pub fn priced(vehicle: VehicleType, distance_km: f64, breakdown: PriceBreakdown) -> Self {
        Self {
            vehicle_type: Some(vehicle),
            distance_km,
            labour_value: breakdown.labour,
            km_value: breakdown.km_rate,
            total_value: breakdown.total,
        }
    }
}

// ---------------------------------------------------------------------------
// Identifier parsing
// ---------------------------------------------------------------------------

/// Parse a profile id from a request path segment.
///
/// Ids are supplied by the client and must be non-negative integers.
pub fn parse_profile_id(raw: &str) -> Result<ProfileId, CoreError> {
    let id: ProfileId = raw.trim().parse().map_err(|_| {
        CoreError::InvalidArgument(format!("profile id '{raw}' is not an integer"))
    })?;
    if id < 0 {
        return Err(CoreError::InvalidArgument(format!(
            "profile id must be non-negative, got {id}"
        )));
    }
    Ok(id)
}

// ---------------------------------------------------------------------------
// Default template
// ---------------------------------------------------------------------------

pub const DEFAULT_ROOM_NAME: &str = "Sala";

impl Profile {
    /// Build the default profile materialized on the first lookup of `id`.
    ///
    /// The two addresses carry real coordinates so the first offer request
    /// has something to route between.
    pub fn seeded(id: ProfileId, now: Timestamp) -> Self {
        let room = Room {
            name: DEFAULT_ROOM_NAME.to_string(),
            boxes: vec![
                MovingBox {
                    items: vec![Item {
                        quantity: 2,
                        kind: "moveis".to_string(),
                    }],
                },
                MovingBox {
                    items: vec![Item {
                        quantity: 1,
                        kind: "tv".to_string(),
                    }],
                },
            ],
        };

        // Sub-second precision does not survive every store; drop it up front.
        let moving_time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());

        Self {
            id,
            inventory: vec![room],
            current_address: Address {
                street: "Santa Luiza".to_string(),
                number: 259,
                latitude: -22.9163398,
                longitude: -43.2341546,
            },
            new_address: Address {
                street: "Av Paulista".to_string(),
                number: 2537,
                latitude: -23.5604276,
                longitude: -46.6579269,
            },
            moving_date: now.date_naive(),
            moving_time,
            offer: Offer::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn seeded_profile_has_sala_with_two_boxes() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let profile = Profile::seeded(42, now);

        assert_eq!(profile.id, 42);
        assert_eq!(profile.inventory.len(), 1);
        let sala = &profile.inventory[0];
        assert_eq!(sala.name, "Sala");
        assert_eq!(sala.boxes.len(), 2);
        assert_eq!(sala.boxes[0].items[0].quantity, 2);
        assert_eq!(sala.boxes[0].items[0].kind, "moveis");
        assert_eq!(sala.boxes[1].items[0].quantity, 1);
        assert_eq!(sala.boxes[1].items[0].kind, "tv");
        assert_eq!(profile.offer, Offer::default());
        assert_eq!(profile.offer.total_value, 0.0);
        assert_eq!(profile.moving_date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_ne!(profile.current_address, profile.new_address);
    }

    #[test]
    fn item_kind_serializes_as_type() {
        let item = Item {
            quantity: 1,
            kind: "tv".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "quantity": 1, "type": "tv" }));
    }

    #[test]
    fn profile_survives_json_document_storage() {
        let profile = Profile::seeded(7, Utc::now());
        let doc = serde_json::to_value(&profile).unwrap();
        assert!(doc["offer"]["vehicle_type"].is_null());
        let back: Profile = serde_json::from_value(doc).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn parse_profile_id_accepts_non_negative_integers() {
        assert_eq!(parse_profile_id("0").unwrap(), 0);
        assert_eq!(parse_profile_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_profile_id_rejects_garbage_and_negatives() {
        assert_matches!(parse_profile_id("abc"), Err(CoreError::InvalidArgument(_)));
        assert_matches!(parse_profile_id("-3"), Err(CoreError::InvalidArgument(_)));
        assert_matches!(parse_profile_id(""), Err(CoreError::InvalidArgument(_)));
    }
}
