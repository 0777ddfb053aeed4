//! Signup, login, and admin-login flows against the stub backend.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use fruitstand_client::api::ApiError;
use fruitstand_client::routes::{Route, RouteDecision};
use fruitstand_core::Email;
use fruitstand_integration_tests::{TestContext, api_client_for, unreachable_backend};

fn email(s: &str) -> Email {
    Email::parse(s).expect("valid test email")
}

#[tokio::test]
async fn signup_success_persists_no_identity() {
    let router = Router::new().route(
        "/auth/user/signup",
        post(|| async { Json(json!({"id": 7, "name": "Jane"})) }),
    );
    let ctx = TestContext::new(router).await;

    let payload = ctx
        .api
        .signup_user("Jane", &email("jane@example.com"), "pw")
        .await
        .expect("signup should succeed");
    assert_eq!(payload, json!({"id": 7, "name": "Jane"}));

    // Signup routes to the login view; nobody is logged in yet.
    assert!(ctx.session.user().is_none());
    assert!(!ctx.session.admin_flag());
}

#[tokio::test]
async fn login_persists_identity_verbatim_across_reload() {
    let router = Router::new().route(
        "/auth/user/login",
        post(|| async { Json(json!({"id": 1, "name": "A"})) }),
    );
    let ctx = TestContext::new(router).await;

    let user = ctx
        .api
        .login_user(&email("a@b.com"), "x")
        .await
        .expect("login should succeed");
    assert_eq!(user.name, "A");

    ctx.session.set_user(&user).expect("identity persists");

    let stored = ctx
        .reopened_session()
        .user()
        .expect("identity survives reload");
    assert_eq!(
        serde_json::to_value(&stored).expect("identity encodes"),
        json!({"id": 1, "name": "A"})
    );
}

#[tokio::test]
async fn backend_detail_message_is_surfaced() {
    let router = Router::new().route(
        "/auth/user/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Invalid credentials"})),
            )
        }),
    );
    let ctx = TestContext::new(router).await;

    let err = ctx
        .api
        .login_user(&email("a@b.com"), "wrong")
        .await
        .expect_err("login should fail");
    let ApiError::RequestFailed(message) = err;
    assert_eq!(message, "Invalid credentials");
}

#[tokio::test]
async fn unparseable_error_bodies_use_the_fixed_fallbacks() {
    let router = Router::new()
        .route(
            "/auth/user/login",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/auth/user/signup",
            post(|| async { StatusCode::BAD_REQUEST }),
        );
    let ctx = TestContext::new(router).await;

    let ApiError::RequestFailed(message) = ctx
        .api
        .login_user(&email("a@b.com"), "x")
        .await
        .expect_err("login should fail");
    assert_eq!(message, "Login failed");

    let ApiError::RequestFailed(message) = ctx
        .api
        .signup_user("Jane", &email("jane@example.com"), "pw")
        .await
        .expect_err("signup should fail");
    assert_eq!(message, "Signup failed");
}

#[tokio::test]
async fn admin_login_records_only_the_marker() {
    let router = Router::new().route(
        "/auth/admin/login",
        post(|| async { Json(json!({"id": 99, "role": "admin"})) }),
    );
    let ctx = TestContext::new(router).await;

    // Dashboard is gated before the login...
    assert_eq!(
        Route::AdminDashboard.resolve(&ctx.session),
        RouteDecision::Redirect(Route::AdminGate)
    );

    ctx.api
        .login_admin(&email("admin@example.com"), "pw")
        .await
        .expect("admin login should succeed");
    ctx.session.set_admin_flag().expect("marker persists");

    // ...and renders after it. No admin payload is retained anywhere.
    assert_eq!(
        Route::AdminDashboard.resolve(&ctx.session),
        RouteDecision::Render
    );
    assert!(ctx.session.user().is_none());
    assert!(ctx.reopened_session().admin_flag());
}

#[tokio::test]
async fn failed_admin_login_leaves_the_flag_unset() {
    let router = Router::new().route(
        "/auth/admin/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Invalid credentials"})),
            )
        }),
    );
    let ctx = TestContext::new(router).await;

    let err = ctx
        .api
        .login_admin(&email("admin@example.com"), "bad")
        .await
        .expect_err("admin login should fail");
    let ApiError::RequestFailed(message) = err;
    assert_eq!(message, "Invalid credentials");
    assert!(!ctx.session.admin_flag());
}

#[tokio::test]
async fn transport_failure_routes_to_request_failed() {
    let api = api_client_for(unreachable_backend().await);

    let err = api
        .login_user(&email("a@b.com"), "x")
        .await
        .expect_err("nothing is listening");
    let ApiError::RequestFailed(message) = err;
    assert!(!message.is_empty());
}
