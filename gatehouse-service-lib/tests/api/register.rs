use crate::helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn register_returns_tokens_and_the_new_user() {
    let app = TestApp::new().await;

    let body = app
        .register_user("Alice", "alice@example.com", "secret1")
        .await;

    assert!(!body["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["refreshToken"].as_str().unwrap().is_empty());
    assert_eq!("Alice", body["user"]["name"]);
    assert_eq!("alice@example.com", body["user"]["email"]);
    assert_eq!("user", body["user"]["role"]);
    // The hash never leaves the service boundary.
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_malformed_input() {
    let app = TestApp::new().await;

    let cases = [
        json!({"name": "Al", "email": "alice@example.com", "password": "secret1"}),
        json!({"name": "Alice", "email": "not-an-email", "password": "secret1"}),
        json!({"name": "Alice", "email": "alice@example.com", "password": "12345"}),
    ];

    for case in cases {
        let response = app.post_register(&case).await;
        assert_eq!(400, response.status().as_u16(), "case: {case}");
    }
}

#[tokio::test]
async fn register_rejects_a_taken_email() {
    let app = TestApp::new().await;

    app.register_user("Alice", "alice@example.com", "secret1")
        .await;

    let response = app
        .post_register(&json!({
            "name": "Alice Again",
            "email": "alice@example.com",
            "password": "secret2",
        }))
        .await;

    assert_eq!(409, response.status().as_u16());
}
