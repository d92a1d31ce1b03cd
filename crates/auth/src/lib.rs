//! Credential and token authority for Quizdeck.
//!
//! Owns everything between a raw email/password pair and a validated token:
//! Argon2id password hashing, HS256 signing with separate access and refresh
//! secrets, and the login / refresh / signup flows over the credential store.

pub mod authority;
pub mod config;
pub mod error;
pub mod password;
pub mod tokens;

pub use authority::{Authority, LoginOutcome};
pub use config::AuthConfig;
pub use error::AuthError;
