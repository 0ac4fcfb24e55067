use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for OAuth provider calls.
///
/// Redirects are disabled so a malicious provider response cannot bounce the
/// client to internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Builds the OAuth2 client for the GitHub login flow.
pub fn setup_github_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    setup_oauth_client(
        &config.github_client_id,
        &config.github_client_secret,
        &config.github_auth_url,
        &config.github_token_url,
        &config.github_redirect_url,
    )
}

/// Builds the OAuth2 client for the Google login flow.
pub fn setup_google_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    setup_oauth_client(
        &config.google_client_id,
        &config.google_client_secret,
        &config.google_auth_url,
        &config.google_token_url,
        &config.google_redirect_url,
    )
}

fn setup_oauth_client(
    client_id: &str,
    client_secret: &str,
    auth_url: &str,
    token_url: &str,
    redirect_url: &str,
) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(client_id.to_string()))
        .set_client_secret(ClientSecret::new(client_secret.to_string()))
        .set_auth_uri(AuthUrl::new(auth_url.to_string()).map_err(|_| invalid_url(auth_url))?)
        .set_token_uri(TokenUrl::new(token_url.to_string()).map_err(|_| invalid_url(token_url))?)
        .set_redirect_uri(
            RedirectUrl::new(redirect_url.to_string()).map_err(|_| invalid_url(redirect_url))?,
        );

    Ok(client)
}

fn invalid_url(url: &str) -> AppError {
    ConfigError::InvalidUrl(url.to_string()).into()
}
