//! Signing configuration for access and refresh tokens.

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
/// Default refresh token expiry in days.
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret used to sign and verify access tokens.
    pub access_secret: String,
    /// HMAC-SHA256 secret used to sign and verify refresh tokens.
    pub refresh_secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
}

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_ACCESS_SECRET`        | **yes**  | --      |
    /// | `JWT_REFRESH_SECRET`       | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if either secret is unset, empty, or if the two are equal.
    /// Both token kinds carry the same claims layout, so distinct secrets
    /// are what keeps an access token from verifying as a refresh token.
    pub fn from_env() -> Self {
        let access_secret = std::env::var("JWT_ACCESS_SECRET")
            .expect("JWT_ACCESS_SECRET must be set in the environment");
        assert!(
            !access_secret.is_empty(),
            "JWT_ACCESS_SECRET must not be empty"
        );

        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .expect("JWT_REFRESH_SECRET must be set in the environment");
        assert!(
            !refresh_secret.is_empty(),
            "JWT_REFRESH_SECRET must not be empty"
        );

        assert!(
            access_secret != refresh_secret,
            "JWT_ACCESS_SECRET and JWT_REFRESH_SECRET must differ"
        );

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            access_secret,
            refresh_secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }

    /// Configured access token lifetime.
    pub fn access_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_token_expiry_mins)
    }

    /// Configured refresh token lifetime.
    pub fn refresh_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.refresh_token_expiry_days)
    }
}
