//! UID generation for generated documents.

use chrono::{DateTime, Utc};
use uuid::Uuid;

const UID_DOMAIN: &str = "seatplan.app";
const TOKEN_LEN: usize = 9;

/// Build a UID from the stamp time and a short random token,
/// e.g. `1780336800000-3f2a9c1de@seatplan.app`.
///
/// Only meant to be unique in practice, it is not a dedup or security key.
pub fn generate_uid(now: DateTime<Utc>) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}@{}",
        now.timestamp_millis(),
        &token[..TOKEN_LEN],
        UID_DOMAIN
    )
}
