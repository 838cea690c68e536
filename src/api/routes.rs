//! API route configuration.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::api::handlers::{certificates, profile, projects, session, skills, social_links};
use crate::state::AppState;

/// Public read-only routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /profile`       - the singleton profile
/// - `GET /skills`        - skills in display order
/// - `GET /projects`      - projects in display order
/// - `GET /certificates`  - certificates in display order
/// - `GET /social-links`  - social links in display order
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::get_profile_handler))
        .route("/skills", get(skills::list_skills_handler))
        .route("/projects", get(projects::list_projects_handler))
        .route("/certificates", get(certificates::list_certificates_handler))
        .route("/social-links", get(social_links::list_social_links_handler))
}

/// Session routes, mounted under `/api/admin` without the auth layer.
///
/// Login must be reachable without a session; logout is deliberately open
/// too so a stale cookie can always be cleared.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(session::login_handler))
        .route("/logout", post(session::logout_handler))
}

/// Admin write routes, mounted under `/api/admin` behind the session
/// cookie middleware.
///
/// # Endpoints (per collection)
///
/// - `POST   /{collection}`          - create, appended to the end
/// - `PUT    /{collection}/{id}`     - replace fields
/// - `DELETE /{collection}/{id}`     - delete (`?confirm=true` required)
/// - `POST   /{collection}/reorder`  - move one entry to a new position
///
/// Plus `PUT /profile` for the singleton profile.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", put(profile::update_profile_handler))
        .route("/skills", post(skills::create_skill_handler))
        .route(
            "/skills/{id}",
            put(skills::update_skill_handler).delete(skills::delete_skill_handler),
        )
        .route("/skills/reorder", post(skills::reorder_skills_handler))
        .route("/projects", post(projects::create_project_handler))
        .route(
            "/projects/{id}",
            put(projects::update_project_handler).delete(projects::delete_project_handler),
        )
        .route("/projects/reorder", post(projects::reorder_projects_handler))
        .route(
            "/certificates",
            post(certificates::create_certificate_handler),
        )
        .route(
            "/certificates/{id}",
            put(certificates::update_certificate_handler)
                .delete(certificates::delete_certificate_handler),
        )
        .route(
            "/certificates/reorder",
            post(certificates::reorder_certificates_handler),
        )
        .route(
            "/social-links",
            post(social_links::create_social_link_handler),
        )
        .route(
            "/social-links/{id}",
            put(social_links::update_social_link_handler)
                .delete(social_links::delete_social_link_handler),
        )
        .route(
            "/social-links/reorder",
            post(social_links::reorder_social_links_handler),
        )
}
