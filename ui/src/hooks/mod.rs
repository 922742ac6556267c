pub mod use_auth;
