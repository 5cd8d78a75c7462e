//! Domain normalization and exemption filtering.
//!
//! This module maps hostnames to their registrable root domain and decides
//! which domains bypass registration-age checking entirely.
//!
//! Key functions:
//! - `root_domain()` - Collapses a hostname to its registrable root
//! - `is_exempt()` - Allowlist / IP-literal / non-web-scheme exemptions

mod exempt;

pub use exempt::is_exempt;

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Compound second-level suffixes under which the registrable root keeps
/// three labels instead of two (e.g. `example.co.uk`).
static TWO_LABEL_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "co.uk", "org.uk", "ac.uk", "gov.uk", "co.jp", "or.jp", "ne.jp", "com.au", "net.au",
        "org.au", "com.br", "org.br", "co.nz", "org.nz", "co.kr", "or.kr", "co.in", "net.in",
        "org.in", "com.mx", "org.mx", "co.za",
    ]
    .into_iter()
    .collect()
});

/// Collapses a hostname to its registrable root domain.
///
/// Strips a single leading `www.` label and keeps the last two labels,
/// or the last three when the trailing pair is a known compound suffix
/// such as `co.uk`. Hostnames with two or fewer labels (including bare
/// names like `localhost`) are returned unchanged.
///
/// Pure string manipulation: no lowercasing, no network, no external
/// state.
///
/// # Examples
///
/// ```
/// use domain_guard::domain::root_domain;
///
/// assert_eq!(root_domain("www.example.com"), "example.com");
/// assert_eq!(root_domain("shop.example.co.uk"), "example.co.uk");
/// assert_eq!(root_domain("localhost"), "localhost");
/// ```
pub fn root_domain(hostname: &str) -> String {
    let stripped = hostname.strip_prefix("www.").unwrap_or(hostname);
    let labels: Vec<&str> = stripped.split('.').collect();
    if labels.len() <= 2 {
        return labels.join(".");
    }
    let last_two = labels[labels.len() - 2..].join(".");
    if TWO_LABEL_SUFFIXES.contains(last_two.as_str()) {
        labels[labels.len() - 3..].join(".")
    } else {
        last_two
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
