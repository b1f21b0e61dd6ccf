use crate::helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn login_returns_a_fresh_token_pair() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "secret1")
        .await;

    let response = app
        .post_login(&json!({"email": "alice@example.com", "password": "secret1"}))
        .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(!body["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["refreshToken"].as_str().unwrap().is_empty());
    assert_eq!("alice@example.com", body["user"]["email"]);
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn login_requires_both_credentials() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&json!({"email": "", "password": "secret1"}))
        .await;
    assert_eq!(400, response.status().as_u16());

    let response = app
        .post_login(&json!({"email": "alice@example.com", "password": ""}))
        .await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register_user("Alice", "alice@example.com", "secret1")
        .await;

    let wrong_password = app
        .post_login(&json!({"email": "alice@example.com", "password": "not-it"}))
        .await;
    let unknown_email = app
        .post_login(&json!({"email": "bob@example.com", "password": "not-it"}))
        .await;

    assert_eq!(401, wrong_password.status().as_u16());
    assert_eq!(401, unknown_email.status().as_u16());

    // Same body too, so the response leaks nothing about which failed.
    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(first, second);
}
