use crate::helpers::TestApp;

#[tokio::test]
async fn refresh_issues_a_new_access_token_and_passes_the_refresh_token_through() {
    let app = TestApp::new().await;
    let body = app
        .register_user("Alice", "alice@example.com", "secret1")
        .await;
    let refresh_token = body["refreshToken"].as_str().unwrap();

    let response = app.post_refresh_token(refresh_token).await;
    assert_eq!(200, response.status().as_u16());

    let refreshed: serde_json::Value = response.json().await.unwrap();
    let new_access_token = refreshed["accessToken"].as_str().unwrap();
    assert_eq!(refresh_token, refreshed["refreshToken"].as_str().unwrap());

    // The new access token is good for protected routes.
    assert_eq!(200, app.get_me(new_access_token).await.status().as_u16());
}

#[tokio::test]
async fn refresh_rejects_an_access_token() {
    let app = TestApp::new().await;
    let body = app
        .register_user("Alice", "alice@example.com", "secret1")
        .await;
    let access_token = body["accessToken"].as_str().unwrap();

    assert_eq!(
        401,
        app.post_refresh_token(access_token).await.status().as_u16()
    );
}

#[tokio::test]
async fn refresh_rejects_garbage_tokens() {
    let app = TestApp::new().await;
    assert_eq!(
        401,
        app.post_refresh_token("not-a-token").await.status().as_u16()
    );
}
