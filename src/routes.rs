//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`     - Health check (public)
//! - `/api/*`          - Public read-only portfolio data
//! - `/api/admin/*`    - Admin writes (session cookie required)
//! - `/uploads/*`      - Uploaded media served from disk
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Session cookie on admin routes
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::api::handlers::health::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// `upload_dir` is the directory [`crate::infrastructure::storage::LocalFileStore`]
/// writes to; it is served back under `/uploads` so stored URLs resolve.
pub fn app_router(state: AppState, upload_dir: &Path) -> NormalizePath<Router> {
    let admin_router = api::routes::session_routes().merge(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes())
        .nest("/api/admin", admin_router)
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
