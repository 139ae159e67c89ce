use url::Url;

use crate::config::SeatplanConfig;
use crate::error::{SeatplanError, SeatplanResult};

/// Public RSVP page of an event, e.g. `https://seatplan.app/rsvp/<event_id>`.
pub fn rsvp_url(config: &SeatplanConfig, event_id: &str) -> SeatplanResult<String> {
    let invalid_base = |reason: String| {
        SeatplanError::Config(format!(
            "Invalid app_base_url '{}': {}",
            config.app_base_url, reason
        ))
    };

    let mut url = Url::parse(&config.app_base_url).map_err(|e| invalid_base(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid_base("cannot be a base URL".into()))?
        .pop_if_empty()
        .push("rsvp")
        .push(event_id);

    Ok(url.to_string())
}
