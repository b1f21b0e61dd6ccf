use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use gatehouse_adapters::http::routes::{
    confirm_otp, login, logout, me, refresh_token, register, request_otp,
};
use gatehouse_core::{EmailClient, OtpCodeStore, RevokedTokenStore, TokenIssuer, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides all auth-related routes
pub struct GatehouseService {
    router: Router,
}

impl GatehouseService {
    /// Create a new GatehouseService with the provided stores, token
    /// issuer, and email client
    ///
    /// # Note on Architecture
    /// Stores implement Clone via internal Arc (or a connection pool)
    /// for thread-safe sharing. Each route is given its specific state
    /// requirements, avoiding unnecessary cloning.
    pub fn new<U, R, O, T, E>(
        user_store: U,
        revoked_token_store: R,
        otp_code_store: O,
        token_issuer: T,
        email_client: E,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        R: RevokedTokenStore + Clone + 'static,
        O: OtpCodeStore + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
        E: EmailClient + Clone + 'static,
    {
        let router = Router::new()
            // Register and login need the user store and the issuer
            .route("/register", post(register::<U, T>))
            .route("/login", post(login::<U, T>))
            .with_state((user_store.clone(), token_issuer.clone()))
            // Logout needs the deny-list and the issuer
            .route("/logout", post(logout::<R, T>))
            .with_state((revoked_token_store.clone(), token_issuer.clone()))
            // Refresh only needs the issuer
            .route("/refresh-token", post(refresh_token::<T>))
            .with_state(token_issuer.clone())
            // Me needs the user store plus the access-token guard
            .route("/me", get(me::<U, R, T>))
            .with_state((user_store.clone(), revoked_token_store, token_issuer))
            // OTP request and confirmation share one path
            .route(
                "/confirm-account",
                get(request_otp::<U, O, E>).post(confirm_otp::<U, O, E>),
            )
            .with_state((user_store, otp_code_store, email_client));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the GatehouseService into a router that can be mounted
    /// on another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_router(mut self, allowed_origins: Option<Vec<HeaderValue>>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::list(allowed_origins));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<Vec<HeaderValue>>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        tracing::info!("Gatehouse listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
