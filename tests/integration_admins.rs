mod common;

use axum::http::StatusCode;
use common::{
    create_test_admin, create_test_company, create_test_user, generate_unique_email, read_json,
    request, setup_test_app,
};
use jobify::jobify_auth::AdminRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_superadmin_creates_admin(pool: PgPool) {
    let superadmin =
        create_test_admin(&pool, "root@x.com", "secret123", AdminRole::Superadmin).await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/admins",
            Some(&superadmin.token()),
            Some(json!({ "name": "Mo", "email": "mo@x.com", "password": "secret123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["role"], "moderator");
    assert!(body.get("password_hash").is_none());

    let response = app
        .oneshot(request(
            "POST",
            "/auth/login/admin",
            None,
            Some(json!({ "email": "mo@x.com", "password": "secret123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["user"]["role"], "moderator");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_admin_duplicate_email_conflicts(pool: PgPool) {
    let superadmin =
        create_test_admin(&pool, "root@x.com", "secret123", AdminRole::Superadmin).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "POST",
            "/admins",
            Some(&superadmin.token()),
            Some(json!({ "name": "Dup", "email": "root@x.com", "password": "secret123" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Email already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_same_email_allowed_across_principal_types(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "secret123").await;
    let superadmin =
        create_test_admin(&pool, "root@x.com", "secret123", AdminRole::Superadmin).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "POST",
            "/admins",
            Some(&superadmin.token()),
            Some(json!({ "name": "Both", "email": email, "password": "secret123" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_admins(pool: PgPool) {
    let superadmin =
        create_test_admin(&pool, "root@x.com", "secret123", AdminRole::Superadmin).await;
    create_test_admin(&pool, "m1@x.com", "secret123", AdminRole::Moderator).await;
    create_test_admin(&pool, "m2@x.com", "secret123", AdminRole::Moderator).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request("GET", "/admins?page=2&limit=2", Some(&superadmin.token()), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["page"], 2);
    assert_eq!(body["meta"]["has_more"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_admin_role(pool: PgPool) {
    let superadmin =
        create_test_admin(&pool, "root@x.com", "secret123", AdminRole::Superadmin).await;
    let moderator = create_test_admin(&pool, "m@x.com", "secret123", AdminRole::Moderator).await;
    let app = setup_test_app(pool);

    let uri = format!("/admins/{}", moderator.id);
    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            &uri,
            Some(&superadmin.token()),
            Some(json!({ "role": "superadmin" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["role"], "superadmin");
    assert_eq!(body["email"], "m@x.com");

    let response = app
        .oneshot(request("GET", &uri, Some(&superadmin.token()), None))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["role"], "superadmin");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_admin_email_conflict(pool: PgPool) {
    let superadmin =
        create_test_admin(&pool, "root@x.com", "secret123", AdminRole::Superadmin).await;
    let moderator = create_test_admin(&pool, "m@x.com", "secret123", AdminRole::Moderator).await;
    let app = setup_test_app(pool);

    let uri = format!("/admins/{}", moderator.id);
    let response = app
        .oneshot(request(
            "PATCH",
            &uri,
            Some(&superadmin.token()),
            Some(json!({ "email": "root@x.com" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_admin_is_not_found(pool: PgPool) {
    let superadmin =
        create_test_admin(&pool, "root@x.com", "secret123", AdminRole::Superadmin).await;
    let app = setup_test_app(pool);
    let uri = format!("/admins/{}", uuid::Uuid::new_v4());

    for method in ["GET", "DELETE"] {
        let response = app
            .clone()
            .oneshot(request(method, &uri, Some(&superadmin.token()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_system_stats(pool: PgPool) {
    create_test_user(&pool, &generate_unique_email(), "secret123").await;
    create_test_user(&pool, &generate_unique_email(), "secret123").await;
    create_test_company(&pool, &generate_unique_email(), "secret123").await;
    let moderator = create_test_admin(&pool, "m@x.com", "secret123", AdminRole::Moderator).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request("GET", "/admins/system-stats", Some(&moderator.token()), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["users"]["total"], 2);
    assert_eq!(body["users"]["new_this_month"], 2);
    assert_eq!(body["companies"]["total"], 1);
    assert_eq!(body["total_admins"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_changes_own_password(pool: PgPool) {
    let moderator = create_test_admin(&pool, "m@x.com", "secret123", AdminRole::Moderator).await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/admins/me/password",
            Some(&moderator.token()),
            Some(json!({ "current_password": "secret123", "new_password": "rotated1" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(
            "POST",
            "/auth/login/admin",
            None,
            Some(json!({ "email": "m@x.com", "password": "secret123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
