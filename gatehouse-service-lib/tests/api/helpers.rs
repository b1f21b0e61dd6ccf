use gatehouse_adapters::{
    config::test,
    email::MockEmailClient,
    persistence::{HashMapOtpCodeStore, HashMapUserStore, HashSetRevokedTokenStore},
    token::{JwtConfig, JwtTokenIssuer},
};
use gatehouse_service_lib::GatehouseService;
use secrecy::Secret;
use serde_json::Value;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub email_client: MockEmailClient,
}

impl TestApp {
    /// Spin up the service on an ephemeral port with in-memory stores
    /// and a recording email client.
    pub async fn new() -> Self {
        let user_store = HashMapUserStore::new();
        let revoked_token_store = HashSetRevokedTokenStore::new();
        let otp_code_store = HashMapOtpCodeStore::new();
        let email_client = MockEmailClient::new();
        let token_issuer = JwtTokenIssuer::new(JwtConfig {
            access_secret: Secret::from("test-access-secret".to_owned()),
            access_ttl_seconds: 600,
            refresh_secret: Secret::from("test-refresh-secret".to_owned()),
            refresh_ttl_seconds: 86_400,
        });

        let service = GatehouseService::new(
            user_store,
            revoked_token_store,
            otp_code_store,
            token_issuer,
            email_client.clone(),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            email_client,
        }
    }

    pub async fn post_register(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self, token: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/logout", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_refresh_token(&self, token: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/refresh-token", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_me(&self, token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/me", self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_request_otp(&self, email: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/confirm-account", self.address))
            .query(&[("email", email)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_confirm_otp(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/confirm-account", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user and return the response body.
    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .post_register(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .await;
        assert_eq!(201, response.status().as_u16());
        response.json().await.expect("Failed to parse response body")
    }

    /// The OTP code from the most recently recorded email.
    pub async fn last_otp(&self) -> String {
        let sent = self
            .email_client
            .last_sent()
            .await
            .expect("No email was recorded");
        extract_otp(&sent.content)
    }
}

pub fn extract_otp(content: &str) -> String {
    content
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_ascii_digit()))
        .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
        .expect("No OTP code in email body")
        .to_string()
}
