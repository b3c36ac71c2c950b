use jobify::jobify_core::{
    BCRYPT_COST, hash_password, hash_password_blocking, verify_password, verify_password_blocking,
};

#[test]
fn test_hash_password_success() {
    let password = "secret123";
    let hash = hash_password(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
    assert!(hash.starts_with(&format!("$2b${}$", BCRYPT_COST)));
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("secret123").unwrap();
    let second = hash_password("secret123").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("secret123", &first));
    assert!(verify_password("secret123", &second));
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password("correctpassword").unwrap();
    assert!(!verify_password("wrongpassword", &hash));
}

#[test]
fn test_verify_password_invalid_hash_is_false() {
    assert!(!verify_password("secret123", "not_a_valid_bcrypt_hash"));
    assert!(!verify_password("secret123", ""));
}

#[test]
fn test_verify_password_case_sensitive() {
    let hash = hash_password("Secret123").unwrap();
    assert!(!verify_password("secret123", &hash));
}

#[test]
fn test_hash_password_unicode() {
    let password = "пароль密码🔐";
    let hash = hash_password(password).unwrap();
    assert!(verify_password(password, &hash));
}

#[tokio::test]
async fn test_blocking_variants_agree() {
    let hash = hash_password_blocking("secret123".to_string()).await.unwrap();

    assert!(verify_password_blocking("secret123".to_string(), hash.clone()).await.unwrap());
    assert!(!verify_password_blocking("secret124".to_string(), hash).await.unwrap());
}
