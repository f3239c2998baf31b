//! End-to-end wizard scenarios: fill step 1, resolve the PIN, verify the
//! OTP, advance, fill step 2, submit.

use std::time::Duration;

use udyam_engine::{App, Focus, LookupConfig, fields};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lookup_config(server: &MockServer) -> LookupConfig {
    LookupConfig {
        endpoint: format!("{}/pincode", server.uri()),
        timeout: Duration::from_secs(2),
    }
}

fn pin_body(state: &str, district: &str) -> serde_json::Value {
    serde_json::json!([{
        "Status": "Success",
        "PostOffice": [{"District": district, "State": state}]
    }])
}

fn focus_otp(app: &mut App) {
    for _ in 0..=app.step().fields.len() {
        if app.focus() == Focus::Otp {
            return;
        }
        app.focus_next();
    }
    panic!("OTP row not reachable by focus cycling");
}

async fn wait_for_state(app: &mut App, expected: &str) {
    for _ in 0..200 {
        app.poll_lookups();
        if app.value(fields::STATE) == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!(
        "lookup never resolved: state = {:?}",
        app.value(fields::STATE)
    );
}

#[tokio::test]
async fn full_registration_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pincode/560001"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pin_body("Karnataka", "Bengaluru")),
        )
        .mount(&server)
        .await;

    let mut app = App::new(lookup_config(&server));
    app.set_field(fields::AADHAAR_NAME, "Jane Doe");
    app.set_field(fields::AADHAAR_NUMBER, "123456789012");
    app.set_field(fields::MOBILE, "9876543210");
    app.set_field(fields::PINCODE, "560001");
    wait_for_state(&mut app, "Karnataka").await;
    assert_eq!(app.value(fields::CITY), "Bengaluru");

    app.issue_otp();
    assert!(app.otp().sent());
    let message = app.message().unwrap().to_string();
    let code = app.otp().server_code().to_string();
    assert!(message.contains(&code), "transport message echoes the code");

    focus_otp(&mut app);
    for key in code.chars() {
        app.input_char(key);
    }
    app.verify_otp();
    assert!(app.otp().verified());

    app.next();
    assert_eq!(app.active_step_index(), 1);

    app.set_field(fields::PAN_HOLDER, "Jane Doe");
    app.set_field(fields::PAN_NUMBER, "abcde1234f");
    app.submit();

    let payload = app.submission().expect("payload built");
    assert_eq!(payload.step1.pincode, "560001");
    assert_eq!(payload.step1.state, "Karnataka");
    assert_eq!(payload.step1.city, "Bengaluru");
    assert_eq!(payload.step2.pan_number, "ABCDE1234F");
    assert!(payload.consent);
}

#[tokio::test]
async fn lookup_falls_back_when_service_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = App::new(lookup_config(&server));
    app.set_field(fields::PINCODE, "560001");
    wait_for_state(&mut app, "Karnataka").await;
    assert_eq!(app.value(fields::CITY), "Bengaluru");
}

#[tokio::test]
async fn rapid_pin_edits_keep_only_the_latest_result() {
    let server = MockServer::start().await;
    // The superseded PIN resolves slowly, after the current one.
    Mock::given(method("GET"))
        .and(path("/pincode/560001"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pin_body("Karnataka", "Bengaluru"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pincode/110001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pin_body("Delhi", "New Delhi")))
        .mount(&server)
        .await;

    let mut app = App::new(lookup_config(&server));
    app.set_field(fields::PINCODE, "560001");
    app.set_field(fields::PINCODE, "56000");
    app.set_field(fields::PINCODE, "110001");
    wait_for_state(&mut app, "Delhi").await;

    // Give the slow 560001 response time to arrive, then confirm it was
    // discarded rather than overwriting the current resolution.
    tokio::time::sleep(Duration::from_millis(400)).await;
    app.poll_lookups();
    assert_eq!(app.value(fields::STATE), "Delhi");
    assert_eq!(app.value(fields::CITY), "New Delhi");
}

#[tokio::test]
async fn submit_refused_before_otp_verification() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = App::new(lookup_config(&server));
    app.set_field(fields::AADHAAR_NAME, "Jane Doe");
    app.set_field(fields::AADHAAR_NUMBER, "123456789012");
    app.set_field(fields::MOBILE, "9876543210");
    app.set_field(fields::PINCODE, "560001");
    app.set_field(fields::PAN_HOLDER, "Jane Doe");
    app.set_field(fields::PAN_NUMBER, "ABCDE1234F");
    app.submit();
    assert!(app.submission().is_none());
    assert!(app.message().is_some_and(|m| m.contains("fix errors")));
}
