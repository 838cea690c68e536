//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, background task spawning,
//! and Axum server lifecycle.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;

use crate::application::services::{
    CollectionService, ProfileService, SessionService, run_session_reaper,
};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgCertificateStore, PgProfileStore, PgProjectStore, PgSkillStore, PgSocialLinkStore,
};
use crate::infrastructure::storage::LocalFileStore;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (and applies migrations)
/// - Local file storage for uploaded media
/// - One collection controller per reorderable collection
/// - Session reaper background task
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let files = Arc::new(LocalFileStore::new(
        &config.upload_dir,
        config.public_base_url.clone(),
    ));

    let sessions = Arc::new(SessionService::new(
        config.session_signing_secret.clone(),
        config.admin_password_hash.clone(),
        config.session_ttl_seconds,
    ));
    tokio::spawn(run_session_reaper(
        sessions.clone(),
        Duration::from_secs(60),
    ));

    let pool = Arc::new(pool);
    let state = AppState {
        skills: Arc::new(CollectionService::new(
            "skills",
            Arc::new(PgSkillStore::new(pool.clone())),
            files.clone(),
        )),
        projects: Arc::new(CollectionService::new(
            "projects",
            Arc::new(PgProjectStore::new(pool.clone())),
            files.clone(),
        )),
        certificates: Arc::new(CollectionService::new(
            "certificates",
            Arc::new(PgCertificateStore::new(pool.clone())),
            files.clone(),
        )),
        social_links: Arc::new(CollectionService::new(
            "social_links",
            Arc::new(PgSocialLinkStore::new(pool.clone())),
            files.clone(),
        )),
        profile: Arc::new(ProfileService::new(
            Arc::new(PgProfileStore::new(pool)),
            files,
        )),
        sessions,
    };

    let app = app_router(state, Path::new(&config.upload_dir));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to install shutdown handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
