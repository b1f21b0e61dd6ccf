use crate::helpers::TestApp;

#[tokio::test]
async fn me_returns_the_profile_without_the_hash() {
    let app = TestApp::new().await;
    let body = app
        .register_user("Alice", "alice@example.com", "secret1")
        .await;
    let access_token = body["accessToken"].as_str().unwrap();

    let response = app.get_me(access_token).await;
    assert_eq!(200, response.status().as_u16());

    let profile: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["id"], profile["id"]);
    assert_eq!("Alice", profile["name"]);
    assert_eq!("alice@example.com", profile["email"]);
    assert_eq!("user", profile["role"]);
    assert!(profile.get("password").is_none());
    assert!(profile.get("password_hash").is_none());
}

#[tokio::test]
async fn me_rejects_a_refresh_token() {
    let app = TestApp::new().await;
    let body = app
        .register_user("Alice", "alice@example.com", "secret1")
        .await;
    let refresh_token = body["refreshToken"].as_str().unwrap();

    assert_eq!(401, app.get_me(refresh_token).await.status().as_u16());
}

#[tokio::test]
async fn me_requires_a_bearer_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/me", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
}
