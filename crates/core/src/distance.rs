//! Travel distance resolution between two addresses.
//!
//! The resolver strategy is chosen once at startup: either a live routing
//! provider (see the `mudae-routing` crate) or [`FixedDistance`], which
//! answers every request with the same seeded value and never touches the
//! network.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::profile::Address;

/// Distance assumed by the fixed strategy when none is configured.
pub const DEFAULT_FIXED_DISTANCE_KM: f64 = 50.0;

/// Resolves the travel distance in kilometres between two addresses.
///
/// Implementations make at most one attempt per call and report any
/// failure as [`CoreError::Dependency`].
#[async_trait]
pub trait DistanceResolver: Send + Sync {
    async fn resolve(&self, from: &Address, to: &Address) -> Result<f64, CoreError>;
}

/// Strategy that ignores the addresses and returns a constant distance.
#[derive(Debug, Clone, Copy)]
pub struct FixedDistance {
    km: f64,
}

impl FixedDistance {
    pub fn new(km: f64) -> Self {
        Self { km }
    }
}

impl Default for FixedDistance {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DISTANCE_KM)
    }
}

#[async_trait]
impl DistanceResolver for FixedDistance {
    async fn resolve(&self, _from: &Address, _to: &Address) -> Result<f64, CoreError> {
        Ok(self.km)
    }
}
