use std::time::Duration;

use mudae_core::distance::DEFAULT_FIXED_DISTANCE_KM;
use mudae_routing::{RoutingConfig, DEFAULT_BASE_URL};
use url::Url;

/// How offer requests obtain a travel distance. Chosen once at startup.
#[derive(Debug, Clone)]
pub enum DistanceStrategy {
    /// Call the routing provider on every offer submission.
    Live(RoutingConfig),
    /// Use a constant distance and never touch the network.
    Fixed { km: f64 },
}

/// Server configuration loaded from environment variables.
///
/// `DATABASE_URL` is always required and `MAPS_KEY` is required for the
/// live distance strategy; everything else has a local-development default.
/// Missing or unparseable values panic so misconfiguration fails at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Base URL encoded into box QR codes.
    pub public_base_url: Url,
    /// Directory served under `/static`.
    pub assets_dir: String,
    pub distance: DistanceStrategy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `8080`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `DATABASE_URL`             | required                   |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                       |
    /// | `PUBLIC_BASE_URL`          | `http://localhost:8080`    |
    /// | `ASSETS_DIR`               | `assets`                   |
    /// | `DISTANCE_STRATEGY`        | `live` (`live` or `fixed`) |
    /// | `MAPS_KEY`                 | required when `live`       |
    /// | `ROUTING_BASE_URL`         | Google Distance Matrix     |
    /// | `ROUTING_TIMEOUT_SECS`     | `10`                       |
    /// | `FIXED_DISTANCE_KM`        | `50`                       |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "8080")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = lookup("DATABASE_URL").expect("DATABASE_URL must be set");

        let database_max_connections: u32 = var("DATABASE_MAX_CONNECTIONS", "20")
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let public_base_url = Url::parse(&var("PUBLIC_BASE_URL", "http://localhost:8080"))
            .expect("PUBLIC_BASE_URL must be an absolute URL");

        let assets_dir = var("ASSETS_DIR", "assets");

        let distance = match var("DISTANCE_STRATEGY", "live").to_ascii_lowercase().as_str() {
            "live" => {
                let api_key = lookup("MAPS_KEY").expect("MAPS_KEY must be set for live distance");
                let timeout_secs: u64 = var("ROUTING_TIMEOUT_SECS", "10")
                    .parse()
                    .expect("ROUTING_TIMEOUT_SECS must be a valid u64");
                DistanceStrategy::Live(RoutingConfig {
                    base_url: var("ROUTING_BASE_URL", DEFAULT_BASE_URL),
                    api_key,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            "fixed" => {
                let km: f64 = lookup("FIXED_DISTANCE_KM")
                    .map(|v| v.parse().expect("FIXED_DISTANCE_KM must be a number"))
                    .unwrap_or(DEFAULT_FIXED_DISTANCE_KM);
                assert!(
                    km.is_finite() && km >= 0.0,
                    "FIXED_DISTANCE_KM must be a non-negative number"
                );
                DistanceStrategy::Fixed { km }
            }
            other => panic!("DISTANCE_STRATEGY must be 'live' or 'fixed', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            database_max_connections,
            public_base_url,
            assets_dir,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(move |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_with_live_strategy() {
        let cfg = config(&[("DATABASE_URL", "postgres://localhost/mudae"), ("MAPS_KEY", "k")]);

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.database_max_connections, 20);
        assert_eq!(cfg.public_base_url.as_str(), "http://localhost:8080/");
        assert_matches!(cfg.distance, DistanceStrategy::Live(ref r) if r.api_key == "k"
            && r.base_url == DEFAULT_BASE_URL
            && r.timeout == Duration::from_secs(10));
    }

    #[test]
    fn fixed_strategy_defaults_to_fifty_km() {
        let cfg = config(&[("DATABASE_URL", "postgres://db"), ("DISTANCE_STRATEGY", "fixed")]);
        assert_matches!(cfg.distance, DistanceStrategy::Fixed { km } if km == 50.0);
    }

    #[test]
    fn fixed_strategy_reads_configured_km() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://db"),
            ("DISTANCE_STRATEGY", "FIXED"),
            ("FIXED_DISTANCE_KM", "12.5"),
        ]);
        assert_matches!(cfg.distance, DistanceStrategy::Fixed { km } if km == 12.5);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://db"),
            ("DISTANCE_STRATEGY", "fixed"),
            ("CORS_ORIGINS", "http://a.test, http://b.test ,"),
        ]);
        assert_eq!(cfg.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    #[should_panic(expected = "DATABASE_URL must be set")]
    fn missing_database_url_is_fatal() {
        config(&[("DISTANCE_STRATEGY", "fixed")]);
    }

    #[test]
    #[should_panic(expected = "MAPS_KEY must be set")]
    fn live_strategy_without_key_is_fatal() {
        config(&[("DATABASE_URL", "postgres://db")]);
    }

    #[test]
    #[should_panic(expected = "DISTANCE_STRATEGY must be 'live' or 'fixed'")]
    fn unknown_strategy_is_fatal() {
        config(&[("DATABASE_URL", "postgres://db"), ("DISTANCE_STRATEGY", "teleport")]);
    }
}
