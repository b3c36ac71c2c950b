use jobify::jobify_auth::{
    AdminRole, PrincipalType, TokenPayload, issue_token, refresh_token, verify_token,
};
use jobify::jobify_config::JwtConfig;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::Value;
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig::new("test_secret_key_for_testing_purposes", 3600)
}

fn raw_claims(token: &str, config: &JwtConfig) -> Value {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp"]);
    decode::<Value>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .unwrap()
    .claims
}

#[test]
fn test_admin_token_wire_format() {
    let config = get_test_jwt_config();
    let id = Uuid::new_v4();
    let payload = TokenPayload::new(id, "a@x.com", PrincipalType::Admin, Some(AdminRole::Superadmin));

    let token = issue_token(&payload, &config).unwrap();
    let claims = raw_claims(&token, &config);

    assert_eq!(claims["sub"], id.to_string());
    assert_eq!(claims["email"], "a@x.com");
    assert_eq!(claims["type"], "admin");
    assert_eq!(claims["role"], "superadmin");
    assert_eq!(
        claims["exp"].as_u64().unwrap() - claims["iat"].as_u64().unwrap(),
        3600
    );
}

#[test]
fn test_user_token_has_no_role() {
    let config = get_test_jwt_config();
    let payload = TokenPayload::new(Uuid::new_v4(), "u@x.com", PrincipalType::User, None);

    let token = issue_token(&payload, &config).unwrap();
    let claims = raw_claims(&token, &config);

    assert_eq!(claims["type"], "user");
    assert!(claims.get("role").is_none());
}

#[test]
fn test_verify_returns_issued_payload() {
    let config = get_test_jwt_config();
    let payload = TokenPayload::new(Uuid::new_v4(), "c@x.com", PrincipalType::Company, None);

    let token = issue_token(&payload, &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.payload(), payload);
}

#[test]
fn test_tampered_token_rejected() {
    let config = get_test_jwt_config();
    let payload = TokenPayload::new(Uuid::new_v4(), "u@x.com", PrincipalType::User, None);
    let token = issue_token(&payload, &config).unwrap();

    let forged = TokenPayload::new(
        Uuid::new_v4(),
        "u@x.com",
        PrincipalType::Admin,
        Some(AdminRole::Superadmin),
    );
    let other = issue_token(&forged, &config).unwrap();
    let other_body = other.split('.').nth(1).unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    parts[1] = other_body;
    let spliced = parts.join(".");

    assert!(verify_token(&spliced, &config).is_err());
}

#[test]
fn test_refresh_keeps_identity() {
    let config = get_test_jwt_config();
    let payload = TokenPayload::new(
        Uuid::new_v4(),
        "m@x.com",
        PrincipalType::Admin,
        Some(AdminRole::Moderator),
    );
    let old = issue_token(&payload, &config).unwrap();

    let new = refresh_token(&old, &config).unwrap();

    assert_eq!(verify_token(&new, &config).unwrap().payload(), payload);
}

#[test]
fn test_refresh_rejects_garbage() {
    let config = get_test_jwt_config();
    let err = refresh_token("not.a.token", &config).unwrap_err();
    assert_eq!(err.status.as_u16(), 401);
}
