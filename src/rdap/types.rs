//! RDAP wire types.

use serde::Deserialize;

/// Event action marking the registration of a domain.
pub(crate) const REGISTRATION_ACTION: &str = "registration";

/// The subset of an RDAP domain response this crate consumes.
///
/// RDAP bodies carry much more (entities, nameservers, notices); only the
/// lifecycle events are deserialized, everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RdapResponse {
    /// Lifecycle events reported for the domain
    #[serde(default)]
    pub events: Vec<RdapEvent>,
}

/// A single RDAP lifecycle event.
#[derive(Debug, Clone, Deserialize)]
pub struct RdapEvent {
    /// What happened, e.g. `registration`, `expiration`, `last changed`
    #[serde(rename = "eventAction")]
    pub event_action: String,
    /// When it happened, usually RFC 3339
    #[serde(rename = "eventDate", default)]
    pub event_date: Option<String>,
}

impl RdapResponse {
    /// Returns the raw date string of the registration event, if present.
    pub fn registration_event_date(&self) -> Option<&str> {
        self.events
            .iter()
            .find(|e| e.event_action == REGISTRATION_ACTION)
            .and_then(|e| e.event_date.as_deref())
    }
}
