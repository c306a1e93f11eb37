use std::sync::Arc;

use mudae_core::distance::{DistanceResolver, FixedDistance};
use mudae_core::service::ProfileService;
use mudae_core::store::ProfileStore;
use mudae_routing::{DistanceMatrixClient, RoutingError};

use crate::config::{DistanceStrategy, ServerConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Profile lifecycle and offer workflow.
    pub service: Arc<ProfileService>,
    /// Server configuration (public base URL for QR codes, timeouts).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the service from a store and the configured distance strategy.
    pub fn new(store: Arc<dyn ProfileStore>, config: ServerConfig) -> Result<Self, RoutingError> {
        let distance = distance_resolver(&config.distance)?;
        Ok(Self {
            service: Arc::new(ProfileService::new(store, distance)),
            config: Arc::new(config),
        })
    }
}

/// Build the resolver for the configured strategy.
pub fn distance_resolver(
    strategy: &DistanceStrategy,
) -> Result<Arc<dyn DistanceResolver>, RoutingError> {
    Ok(match strategy {
        DistanceStrategy::Live(routing) => {
            tracing::info!(base_url = %routing.base_url, "Using live distance resolution");
            Arc::new(DistanceMatrixClient::new(routing.clone())?)
        }
        DistanceStrategy::Fixed { km } => {
            tracing::info!(km, "Using fixed distance");
            Arc::new(FixedDistance::new(*km))
        }
    })
}
