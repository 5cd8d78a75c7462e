//! RDAP client contract tests.
//!
//! These verify the lookup client against a local mock server: the
//! request shape it sends, the event extraction on success, and the
//! failure paths that all collapse to "no registration date". No real
//! network access.

use std::sync::Arc;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use domain_guard::{RdapClient, RegistrationLookup};

fn client_for(server: &Server) -> RdapClient {
    let http = Arc::new(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(8))
            .build()
            .expect("client builds"),
    );
    RdapClient::new(http, format!("http://{}", server.addr()))
}

#[tokio::test]
async fn test_registration_event_date_is_extracted() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/domain/newsite.example"),
            request::headers(contains((
                "accept",
                "application/rdap+json, application/json"
            ))),
        ])
        .respond_with(json_encoded(json!({
            "objectClassName": "domain",
            "events": [
                {"eventAction": "last changed", "eventDate": "2025-05-30T10:00:00Z"},
                {"eventAction": "registration", "eventDate": "2025-05-27T00:00:00Z"},
                {"eventAction": "expiration", "eventDate": "2026-05-27T00:00:00Z"}
            ]
        }))),
    );

    let client = client_for(&server);
    let date = client
        .registration_date("newsite.example")
        .await
        .expect("registration date present");
    assert_eq!(date.format("%Y-%m-%d").to_string(), "2025-05-27");
}

#[tokio::test]
async fn test_missing_registration_event_yields_none() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/domain/odd.example")).respond_with(
            json_encoded(json!({
                "objectClassName": "domain",
                "events": [
                    {"eventAction": "expiration", "eventDate": "2026-05-27T00:00:00Z"}
                ]
            })),
        ),
    );

    let client = client_for(&server);
    assert_eq!(client.registration_date("odd.example").await, None);
}

#[tokio::test]
async fn test_not_found_yields_none() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/domain/missing.example"))
            .respond_with(status_code(404)),
    );

    let client = client_for(&server);
    assert_eq!(client.registration_date("missing.example").await, None);
}

#[tokio::test]
async fn test_server_error_yields_none() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/domain/flaky.example"))
            .respond_with(status_code(503)),
    );

    let client = client_for(&server);
    assert_eq!(client.registration_date("flaky.example").await, None);
}

#[tokio::test]
async fn test_malformed_body_yields_none() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/domain/garbled.example"))
            .respond_with(status_code(200).body("this is not json")),
    );

    let client = client_for(&server);
    assert_eq!(client.registration_date("garbled.example").await, None);
}

#[tokio::test]
async fn test_unparseable_event_date_yields_none() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/domain/baddate.example"))
            .respond_with(json_encoded(json!({
                "events": [
                    {"eventAction": "registration", "eventDate": "sometime last spring"}
                ]
            }))),
    );

    let client = client_for(&server);
    assert_eq!(client.registration_date("baddate.example").await, None);
}

#[tokio::test]
async fn test_transport_failure_yields_none() {
    // Bind a port, then release it so the connection is refused
    let dead_addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr")
    };

    let http = Arc::new(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("client builds"),
    );
    let client = RdapClient::new(http, format!("http://{}", dead_addr));
    assert_eq!(client.registration_date("unreachable.example").await, None);
}
