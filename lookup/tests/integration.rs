//! Integration tests for the PIN lookup: remote resolution, every fallback
//! path, and the no-network short-circuit for malformed input.

use std::time::Duration;

use udyam_lookup::{Location, LookupConfig, lookup};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> LookupConfig {
    LookupConfig {
        endpoint: format!("{}/pincode", server.uri()),
        timeout: Duration::from_secs(2),
    }
}

fn success_body(state: &str, district: &str) -> serde_json::Value {
    serde_json::json!([{
        "Message": "Number of pincode(s) found:1",
        "Status": "Success",
        "PostOffice": [
            {"Name": "Head Office", "District": district, "State": state},
            {"Name": "Sub Office", "District": district, "State": state}
        ]
    }])
}

#[tokio::test]
async fn remote_success_returns_first_office() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pincode/751001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("Odisha", "Khordha")))
        .expect(1)
        .mount(&server)
        .await;

    let location = lookup("751001", &config_for(&server)).await;
    assert_eq!(
        location,
        Some(Location {
            state: "Odisha".to_string(),
            city: "Khordha".to_string(),
        })
    );
}

#[tokio::test]
async fn service_error_status_falls_back_to_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pincode/560001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "Message": "No records found",
            "Status": "Error",
            "PostOffice": null
        }])))
        .mount(&server)
        .await;

    let location = lookup("560001", &config_for(&server)).await.unwrap();
    assert_eq!(location.state, "Karnataka");
    assert_eq!(location.city, "Bengaluru");
}

#[tokio::test]
async fn http_failure_falls_back_to_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let location = lookup("110001", &config_for(&server)).await.unwrap();
    assert_eq!(location.state, "Delhi");
    assert_eq!(location.city, "New Delhi");
}

#[tokio::test]
async fn malformed_body_falls_back_to_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let location = lookup("700001", &config_for(&server)).await.unwrap();
    assert_eq!(location.state, "West Bengal");
}

#[tokio::test]
async fn failure_with_unknown_pin_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert_eq!(lookup("999999", &config_for(&server)).await, None);
}

#[tokio::test]
async fn non_pin_input_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("X", "Y")))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    assert_eq!(lookup("", &config).await, None);
    assert_eq!(lookup("56001", &config).await, None);
    assert_eq!(lookup("56000a", &config).await, None);
}
