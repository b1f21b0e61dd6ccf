mod hashmap_otp_code_store;
mod hashmap_user_store;
mod hashset_revoked_token_store;
mod password_hasher;
mod postgres_user_store;
mod redis_otp_code_store;
mod redis_revoked_token_store;

pub use hashmap_otp_code_store::HashMapOtpCodeStore;
pub use hashmap_user_store::HashMapUserStore;
pub use hashset_revoked_token_store::HashSetRevokedTokenStore;
pub use password_hasher::{compute_password_hash, verify_password_hash};
pub use postgres_user_store::PostgresUserStore;
pub use redis_otp_code_store::RedisOtpCodeStore;
pub use redis_revoked_token_store::RedisRevokedTokenStore;
