/// Domain error shared by every workflow in the crate.
///
/// The four variants are the whole taxonomy: the HTTP layer maps each one to
/// a distinct status code, and nothing in the core retries on any of them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or out-of-domain input (profile id, vehicle tier, box index).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// The routing provider was unreachable or answered with a failure.
    #[error("Dependency error: {0}")]
    Dependency(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
