mod common;

use axum::{
    Router,
    routing::{get, put},
};
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::json;

use portfolio_backend::AppState;
use portfolio_backend::api::handlers::profile::{get_profile_handler, update_profile_handler};

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/profile", get(get_profile_handler))
        .route("/api/admin/profile", put(update_profile_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn base_payload() -> serde_json::Value {
    json!({
        "name": "Test Owner",
        "title": "Engineer",
        "description": "Short description",
        "bio": "Longer bio",
    })
}

#[tokio::test]
async fn test_get_profile() {
    let ctx = common::build_state();
    let server = make_server(ctx.state);

    let response = server.get("/api/profile").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Test Owner");
    assert_eq!(body["avatar_url"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_update_profile_fields() {
    let ctx = common::build_state();
    let server = make_server(ctx.state);

    let mut payload = base_payload();
    payload["name"] = json!("New Name");
    payload["location"] = json!("Berlin");

    let form = MultipartForm::new().add_text("payload", payload.to_string());
    let response = server.put("/api/admin/profile").multipart(form).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "New Name");
    assert_eq!(body["location"], "Berlin");
}

#[tokio::test]
async fn test_update_profile_with_avatar_and_cover() {
    let ctx = common::build_state();
    let server = make_server(ctx.state);

    let form = MultipartForm::new()
        .add_text("payload", base_payload().to_string())
        .add_part(
            "avatar",
            Part::bytes(b"avatar-bytes".to_vec())
                .file_name("me.png")
                .mime_type("image/png"),
        )
        .add_part(
            "cover",
            Part::bytes(b"cover-bytes".to_vec())
                .file_name("cover.jpg")
                .mime_type("image/jpeg"),
        );

    let response = server.put("/api/admin/profile").multipart(form).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["avatar_url"], "/uploads/avatars/me.png");
    assert_eq!(body["cover_image"], "/uploads/covers/cover.jpg");

    let uploads = ctx.files.uploads.lock().await;
    assert_eq!(uploads.len(), 2);
}

#[tokio::test]
async fn test_update_profile_upload_failure_aborts_save() {
    let ctx = common::build_state();
    ctx.files
        .fail
        .store(true, std::sync::atomic::Ordering::SeqCst);
    let server = make_server(ctx.state);

    let mut payload = base_payload();
    payload["name"] = json!("Should Not Stick");

    let form = MultipartForm::new()
        .add_text("payload", payload.to_string())
        .add_part(
            "avatar",
            Part::bytes(b"avatar-bytes".to_vec())
                .file_name("me.png")
                .mime_type("image/png"),
        );

    let response = server.put("/api/admin/profile").multipart(form).await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(ctx.profile.row.lock().await.name, "Test Owner");
}

#[tokio::test]
async fn test_update_profile_rejects_invalid_email() {
    let ctx = common::build_state();
    let server = make_server(ctx.state);

    let mut payload = base_payload();
    payload["email"] = json!("not-an-email");

    let form = MultipartForm::new().add_text("payload", payload.to_string());
    let response = server.put("/api/admin/profile").multipart(form).await;

    response.assert_status_bad_request();
}
