/// Primary keys of every survey table (`BIGSERIAL`).
pub type DbId = i64;

/// `TIMESTAMPTZ` columns, always read back in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
