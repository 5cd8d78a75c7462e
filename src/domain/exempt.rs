//! Exemption filter for domains that never need a registration check.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Dotted-quad pattern. Octet ranges are deliberately not validated; any
/// four dot-separated number groups read as an address literal.
static IPV4_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+\.\d+$").expect("IPv4 literal pattern is valid")
});

/// High-traffic domains that are never worth an RDAP round trip.
static ALLOWLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "localhost",
        "127.0.0.1",
        "0.0.0.0",
        "google.com",
        "google.fr",
        "youtube.com",
        "facebook.com",
        "twitter.com",
        "x.com",
        "github.com",
        "wikipedia.org",
        "amazon.com",
        "amazon.fr",
        "microsoft.com",
        "apple.com",
        "linkedin.com",
        "reddit.com",
        "instagram.com",
        "whatsapp.com",
        "netflix.com",
        "discord.com",
        "cloudflare.com",
        "mozilla.org",
        "tiktok.com",
        "snapchat.com",
        "paypal.com",
        "adobe.com",
    ]
    .into_iter()
    .collect()
});

/// Scheme prefixes that mark browser-internal or data URLs.
const NON_WEB_PREFIXES: [&str; 4] = ["chrome://", "brave://", "data:", "blob:"];

/// Returns true when `domain` should bypass evaluation entirely.
///
/// Exempt domains are classified `safe` without consulting the cache or
/// the lookup client, and are never cached. Covers literal IPv4
/// addresses, the fixed allowlist of high-traffic domains, and strings
/// carrying a non-web scheme prefix.
///
/// # Examples
///
/// ```
/// use domain_guard::domain::is_exempt;
///
/// assert!(is_exempt("192.168.1.1"));
/// assert!(is_exempt("github.com"));
/// assert!(!is_exempt("randomnewsite123.net"));
/// ```
pub fn is_exempt(domain: &str) -> bool {
    if IPV4_LITERAL.is_match(domain) {
        return true;
    }
    if ALLOWLIST.contains(domain) {
        return true;
    }
    NON_WEB_PREFIXES
        .iter()
        .any(|prefix| domain.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_literals_are_exempt() {
        assert!(is_exempt("127.0.0.1"));
        assert!(is_exempt("192.168.1.1"));
        assert!(is_exempt("8.8.8.8"));
        // No octet-range validation on purpose
        assert!(is_exempt("999.999.999.999"));
    }

    #[test]
    fn test_allowlist_members_are_exempt() {
        assert!(is_exempt("github.com"));
        assert!(is_exempt("wikipedia.org"));
        assert!(is_exempt("localhost"));
    }

    #[test]
    fn test_ordinary_domains_are_not_exempt() {
        assert!(!is_exempt("randomnewsite123.net"));
        assert!(!is_exempt("example.com"));
        // Subdomains of allowlisted domains are not themselves allowlisted;
        // normalization collapses them before this filter runs.
        assert!(!is_exempt("gist.github.com"));
    }

    #[test]
    fn test_non_web_prefixes_are_exempt() {
        assert!(is_exempt("chrome://settings"));
        assert!(is_exempt("brave://rewards"));
        assert!(is_exempt("data:text/html;base64,AAAA"));
        assert!(is_exempt("blob:https://example.com/uuid"));
    }

    #[test]
    fn test_partial_ip_is_not_exempt() {
        assert!(!is_exempt("1.1"));
        assert!(!is_exempt("10.0.0"));
    }
}
