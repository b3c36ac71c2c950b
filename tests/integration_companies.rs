mod common;

use axum::http::StatusCode;
use common::{
    create_test_admin, create_test_company, generate_unique_email, read_json, request,
    setup_test_app,
};
use jobify::jobify_auth::AdminRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_register_company_then_login(pool: PgPool) {
    let app = setup_test_app(pool);
    let email = generate_unique_email();

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/companies",
            None,
            Some(json!({
                "name": "Acme",
                "email": email,
                "password": "secret123",
                "website": "https://acme.com"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["website"], "https://acme.com");

    let response = app
        .oneshot(request(
            "POST",
            "/auth/login/company",
            None,
            Some(json!({ "email": email, "password": "secret123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["user"]["type"], "company");
    assert_eq!(body["user"]["name"], "Acme");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_company_conflicts(pool: PgPool) {
    let email = generate_unique_email();
    create_test_company(&pool, &email, "secret123").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(request(
            "POST",
            "/companies",
            None,
            Some(json!({ "name": "Acme", "email": email, "password": "secret123" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_company_profile(pool: PgPool) {
    let company = create_test_company(&pool, &generate_unique_email(), "secret123").await;
    let token = company.token();
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            "/companies/me",
            Some(&token),
            Some(json!({ "location": "Lagos" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request("GET", "/companies/me", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["location"], "Lagos");
    assert_eq!(body["id"], company.id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_staff_company_lookup(pool: PgPool) {
    let company = create_test_company(&pool, &generate_unique_email(), "secret123").await;
    let moderator =
        create_test_admin(&pool, &generate_unique_email(), "secret123", AdminRole::Moderator).await;
    let app = setup_test_app(pool);

    let uri = format!("/companies/{}", company.id);
    let response = app
        .clone()
        .oneshot(request("GET", &uri, Some(&moderator.token()), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let uri = format!("/companies/{}", uuid::Uuid::new_v4());
    let response = app
        .oneshot(request("GET", &uri, Some(&moderator.token()), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
