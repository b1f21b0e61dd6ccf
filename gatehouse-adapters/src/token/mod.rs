mod jwt_token_issuer;

pub use jwt_token_issuer::{
    Claims, JwtConfig, JwtTokenIssuer, TokenAuthError, validate_access_token,
};
