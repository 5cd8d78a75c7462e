//! Production RDAP client.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header;

use super::parse::parse_event_date;
use super::types::RdapResponse;
use super::RegistrationLookup;
use crate::config::{Config, RDAP_ACCEPT};
use crate::error_handling::InitializationError;
use crate::initialization::init_client;

/// RDAP lookup client.
///
/// Issues a single `GET {base}/domain/{domain}` per lookup. The hard
/// timeout lives on the underlying `reqwest::Client` (built by
/// [`init_client`]), so a lookup resolves within the bound even when the
/// caller has no deadline of its own. There is no retry: one bounded
/// attempt per request.
pub struct RdapClient {
    http: Arc<reqwest::Client>,
    base_url: String,
}

impl RdapClient {
    /// Creates a client from a prepared HTTP client and RDAP base URL.
    pub fn new(http: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Creates a client with the configured base URL and lookup timeout.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let http = init_client(config)?;
        Ok(Self::new(http, config.rdap_base_url.clone()))
    }
}

#[async_trait]
impl RegistrationLookup for RdapClient {
    async fn registration_date(&self, domain: &str) -> Option<DateTime<Utc>> {
        let url = format!("{}/domain/{}", self.base_url, domain);
        log::debug!("RDAP lookup for {} via {}", domain, url);

        let response = match self
            .http
            .get(&url)
            .header(header::ACCEPT, RDAP_ACCEPT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                log::warn!("RDAP timeout for {}", domain);
                return None;
            }
            Err(e) => {
                log::warn!("RDAP request error for {}: {}", domain, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("RDAP returned {} for {}", status, domain);
            return None;
        }

        let body: RdapResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("RDAP body for {} unreadable: {}", domain, e);
                return None;
            }
        };

        let Some(raw_date) = body.registration_event_date() else {
            log::warn!("No registration event found for {}", domain);
            return None;
        };

        match parse_event_date(raw_date) {
            Some(date) => {
                log::debug!("{} registered {}", domain, date.format("%Y-%m-%d"));
                Some(date)
            }
            None => {
                log::warn!(
                    "Unparseable registration date {:?} for {}",
                    raw_date,
                    domain
                );
                None
            }
        }
    }
}
