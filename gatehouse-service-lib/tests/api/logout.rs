use crate::helpers::TestApp;

#[tokio::test]
async fn logout_revokes_the_access_token() {
    let app = TestApp::new().await;
    let body = app
        .register_user("Alice", "alice@example.com", "secret1")
        .await;
    let access_token = body["accessToken"].as_str().unwrap();

    // The token works before logout.
    assert_eq!(200, app.get_me(access_token).await.status().as_u16());

    assert_eq!(200, app.post_logout(access_token).await.status().as_u16());

    // Signature and expiry are still valid, yet the token is rejected.
    assert_eq!(401, app.get_me(access_token).await.status().as_u16());
}

#[tokio::test]
async fn logout_rejects_an_already_revoked_token() {
    let app = TestApp::new().await;
    let body = app
        .register_user("Alice", "alice@example.com", "secret1")
        .await;
    let access_token = body["accessToken"].as_str().unwrap();

    assert_eq!(200, app.post_logout(access_token).await.status().as_u16());
    assert_eq!(401, app.post_logout(access_token).await.status().as_u16());
}

#[tokio::test]
async fn logout_requires_a_bearer_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/logout", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn logout_rejects_garbage_tokens() {
    let app = TestApp::new().await;
    assert_eq!(401, app.post_logout("not-a-token").await.status().as_u16());
}
