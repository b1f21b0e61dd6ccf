pub mod email;
pub mod otp_code;
pub mod password;
pub mod role;
pub mod token_pair;
pub mod user;
pub mod user_name;
