/// Profiles are keyed by an externally supplied integer (PostgreSQL BIGINT).
pub type ProfileId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
