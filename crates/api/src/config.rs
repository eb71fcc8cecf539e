use crate::auth::jwt::JwtConfig;

use mutuals_core::rewards::{DEFAULT_DAILY_CHECKIN_POINTS, DEFAULT_DAILY_LIKE_POINTS};

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Points granted by a successful daily check-in claim.
    pub daily_checkin_points: i64,
    /// Points granted by a successful daily-like bonus claim.
    pub daily_like_points: i64,
    /// JWT token validation configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `POINTS_DAILY_CHECKIN`  | `50`                       |
    /// | `POINTS_DAILY_LIKE`     | `25`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let daily_checkin_points: i64 = std::env::var("POINTS_DAILY_CHECKIN")
            .unwrap_or_else(|_| DEFAULT_DAILY_CHECKIN_POINTS.to_string())
            .parse()
            .expect("POINTS_DAILY_CHECKIN must be a valid i64");

        let daily_like_points: i64 = std::env::var("POINTS_DAILY_LIKE")
            .unwrap_or_else(|_| DEFAULT_DAILY_LIKE_POINTS.to_string())
            .parse()
            .expect("POINTS_DAILY_LIKE must be a valid i64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            daily_checkin_points,
            daily_like_points,
            jwt,
        }
    }
}
