//! Quill -- blog platform backend.
//!
//! REST API for posts, threaded comments, and users, with OAuth-based login
//! and bearer-token authentication, backed by SeaORM over SQLite.
//!
//! # Architecture
//!
//! The application follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **DTO Layer** (`dto/`) - Wire types with OpenAPI schemas
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard
//!
//! Supporting modules provide application infrastructure: `config`, `state`,
//! `startup`, `router`, and `scheduler`.

mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use crate::{config::Config, error::AppError, service::token::TokenService, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let github_oauth = startup::setup_github_oauth_client(&config)?;
    let google_oauth = startup::setup_google_oauth_client(&config)?;
    let tokens = TokenService::new(&config.jwt_secret);

    // Periodic purge of expired rows from the token blacklist
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::token_cleanup::start_scheduler(scheduler_db).await {
            tracing::error!("Token cleanup scheduler error: {}", e);
        }
    });

    let app = router::router(AppState::new(
        db,
        http_client,
        github_oauth,
        google_oauth,
        tokens,
    ));

    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
