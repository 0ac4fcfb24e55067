use crate::error::{config::ConfigError, AppError};

const GITHUB_AUTH_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,

    pub github_client_id: String,
    pub github_client_secret: String,
    pub github_redirect_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub github_auth_url: String,
    pub github_token_url: String,
    pub google_auth_url: String,
    pub google_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            jwt_secret: require("JWT_SECRET_KEY")?,
            github_client_id: require("OAUTH_GITHUB_CLIENT_ID")?,
            github_client_secret: require("OAUTH_GITHUB_CLIENT_SECRET")?,
            github_redirect_url: require("OAUTH_GITHUB_REDIRECT_URL")?,
            google_client_id: require("OAUTH_GOOGLE_CLIENT_ID")?,
            google_client_secret: require("OAUTH_GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: require("OAUTH_GOOGLE_REDIRECT_URL")?,
            github_auth_url: GITHUB_AUTH_URL.to_string(),
            github_token_url: GITHUB_TOKEN_URL.to_string(),
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
        })
    }
}

fn require(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}
