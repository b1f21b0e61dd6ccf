use crate::helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn otp_round_trip_succeeds_exactly_once() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "secret1")
        .await;

    let response = app.get_request_otp("alice@example.com").await;
    assert_eq!(200, response.status().as_u16());

    let code = app.last_otp().await;
    let body = json!({"email": "alice@example.com", "otpCode": code});

    let first = app.post_confirm_otp(&body).await;
    assert_eq!(200, first.status().as_u16());

    // The code was single-use.
    let replay = app.post_confirm_otp(&body).await;
    assert_eq!(401, replay.status().as_u16());
}

#[tokio::test]
async fn otp_request_for_an_unknown_email_fails() {
    let app = TestApp::new().await;

    let response = app.get_request_otp("nobody@example.com").await;
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn a_wrong_code_is_rejected() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "secret1")
        .await;

    assert_eq!(
        200,
        app.get_request_otp("alice@example.com")
            .await
            .status()
            .as_u16()
    );

    let code = app.last_otp().await;
    // Six valid digits that cannot equal the stored code.
    let wrong = if code == "999999" { "999998" } else { "999999" };

    let response = app
        .post_confirm_otp(&json!({"email": "alice@example.com", "otpCode": wrong}))
        .await;
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn confirming_without_a_requested_code_fails() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "secret1")
        .await;

    let response = app
        .post_confirm_otp(&json!({"email": "alice@example.com", "otpCode": "123456"}))
        .await;
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn a_new_request_overwrites_the_prior_code() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "secret1")
        .await;

    app.get_request_otp("alice@example.com").await;
    let first_code = app.last_otp().await;
    app.get_request_otp("alice@example.com").await;
    let second_code = app.last_otp().await;

    // The first code only works if the second request happened to
    // generate the same digits.
    if first_code != second_code {
        let stale = app
            .post_confirm_otp(&json!({"email": "alice@example.com", "otpCode": first_code}))
            .await;
        assert_eq!(401, stale.status().as_u16());
    }

    let response = app
        .post_confirm_otp(&json!({"email": "alice@example.com", "otpCode": second_code}))
        .await;
    assert_eq!(200, response.status().as_u16());
}
