mod confirm_account;
mod helpers;
mod login;
mod logout;
mod me;
mod refresh_token;
mod register;
