//! Vehicle tiers and the offer pricing table.
//!
//! Pricing is a pure function of the tier and the travel distance:
//! `total = labour + km_rate * distance_km`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Vehicle tier
// ---------------------------------------------------------------------------

/// One of the three fixed service levels, smallest and cheapest first.
///
/// Serialized as its integer tier so stored offers read `"vehicle_type": 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum VehicleType {
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Fixed labour cost for the tier.
    pub fn labour(self) -> f64 {
        match self {
            Self::Small => 250.0,
            Self::Medium => 350.0,
            Self::Large => 500.0,
        }
    }

    /// Cost per kilometre travelled.
    pub fn km_rate(self) -> f64 {
        match self {
            Self::Small => 2.0,
            Self::Medium => 2.6,
            Self::Large => 3.0,
        }
    }
}

impl TryFrom<i64> for VehicleType {
    type Error = CoreError;

    fn try_from(tier: i64) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Self::Small),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Large),
            _ => Err(CoreError::InvalidArgument(
                "vehicle type must be 1, 2, or 3".to_string(),
            )),
        }
    }
}

impl From<VehicleType> for i64 {
    fn from(vehicle: VehicleType) -> Self {
        vehicle as i64
    }
}

/// Parse a raw tier from a request path segment.
///
/// Only checks that the segment is an integer; domain checks happen in
/// [`VehicleType::try_from`].
pub fn parse_tier(raw: &str) -> Result<i64, CoreError> {
    raw.trim().parse().map_err(|_| {
        CoreError::InvalidArgument(format!("vehicle type '{raw}' is not an integer"))
    })
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Monetary breakdown of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub labour: f64,
    pub km_rate: f64,
    pub total: f64,
}

/// Price a move for the given tier and distance.
///
/// Rejects negative and non-finite distances; a bogus distance would
/// otherwise produce an offer cheaper than the labour base.
pub fn price(vehicle: VehicleType, distance_km: f64) -> Result<PriceBreakdown, CoreError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(CoreError::InvalidArgument(format!(
            "distance must be a non-negative number of kilometres, got {distance_km}"
        )));
    }

    let labour = vehicle.labour();
    let km_rate = vehicle.km_rate();
    Ok(PriceBreakdown {
        labour,
        km_rate,
        total: labour + km_rate * distance_km,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
