//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for RDAP lookups.
///
/// The client carries the hard lookup timeout, so every request through
/// it resolves within the bound regardless of caller deadlines. Redirects
/// are followed; rdap.org answers with a redirect to the registry
/// responsible for the queried TLD.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client construction
/// fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.lookup_timeout_seconds))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_succeeds_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }
}
