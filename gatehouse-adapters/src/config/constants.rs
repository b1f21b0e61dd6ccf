pub mod env {
    pub const JWT_ACCESS_SECRET_ENV_VAR: &str = "JWT_ACCESS_SECRET";
    pub const JWT_ACCESS_TTL_SECONDS_ENV_VAR: &str = "JWT_ACCESS_TTL_SECONDS";
    pub const JWT_REFRESH_SECRET_ENV_VAR: &str = "JWT_REFRESH_SECRET";
    pub const JWT_REFRESH_TTL_SECONDS_ENV_VAR: &str = "JWT_REFRESH_TTL_SECONDS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const POSTMARK_AUTH_TOKEN_ENV_VAR: &str = "POSTMARK_AUTH_TOKEN";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod email_client {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const SENDER: &str = "accounts@gatehouse.dev";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
