//! "Add to calendar" deep links for web calendars, and the RSVP page link
//! that events point back to.

mod google;
mod outlook;
mod rsvp;

pub use google::{GOOGLE_CALENDAR_BASE, google_calendar_url};
pub use outlook::{OUTLOOK_COMPOSE_BASE, outlook_calendar_url};
pub use rsvp::rsvp_url;

use url::form_urlencoded::Serializer;

/// Join `base` and `application/x-www-form-urlencoded` query pairs,
/// skipping pairs without a value.
fn build_link<'a>(
    base: &str,
    params: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> String {
    let mut query = Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value {
            query.append_pair(key, value);
        }
    }
    format!("{}?{}", base, query.finish())
}
