// Domain normalization tests.

use super::*;

#[test]
fn test_root_domain_strips_www() {
    assert_eq!(root_domain("www.example.com"), "example.com");
}

#[test]
fn test_root_domain_collapses_subdomains() {
    assert_eq!(root_domain("a.b.example.com"), "example.com");
    assert_eq!(root_domain("deep.stack.of.labels.example.com"), "example.com");
}

#[test]
fn test_root_domain_compound_suffix() {
    assert_eq!(root_domain("www.example.co.uk"), "example.co.uk");
    assert_eq!(root_domain("shop.example.co.uk"), "example.co.uk");
    assert_eq!(root_domain("example.com.au"), "example.com.au");
    assert_eq!(root_domain("mail.example.or.jp"), "example.or.jp");
}

#[test]
fn test_root_domain_plain_two_labels() {
    assert_eq!(root_domain("example.com"), "example.com");
}

#[test]
fn test_root_domain_single_label() {
    assert_eq!(root_domain("localhost"), "localhost");
}

#[test]
fn test_root_domain_www_only_counts_once() {
    // Only a leading www. label is stripped
    assert_eq!(root_domain("www.www.example.com"), "example.com");
    assert_eq!(root_domain("wwwexample.com"), "wwwexample.com");
}

#[test]
fn test_root_domain_label_count_preserved_for_short_hosts() {
    // Hosts with two or fewer labels come back with the same label count
    for host in ["example.com", "intranet", "box.local"] {
        let root = root_domain(host);
        assert_eq!(
            root.split('.').count(),
            host.split('.').count(),
            "label count changed for {host}"
        );
    }
}

#[test]
fn test_root_domain_case_sensitive_suffix_match() {
    // The suffix table is matched on the literal string, so an uppercased
    // compound suffix falls through to the plain two-label rule
    assert_eq!(root_domain("shop.example.CO.UK"), "CO.UK");
}
