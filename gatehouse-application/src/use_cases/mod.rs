pub mod confirm_otp;
pub mod get_profile;
pub mod login;
pub mod logout;
pub mod refresh_token;
pub mod register;
pub mod request_otp;
