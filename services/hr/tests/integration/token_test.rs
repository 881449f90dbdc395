use chrono::{Duration, Utc};

use staffdesk_hr::domain::types::TOKEN_LEN;
use staffdesk_hr::error::HrServiceError;
use staffdesk_hr::usecase::token::{
    AuthenticateInput, AuthenticateUseCase, RefreshTokenUseCase, RevokeTokenUseCase,
    decode_access_token, issue_access_token, new_refresh_token, random_token_string,
};

use crate::helpers::{
    MockAccountRepo, MockRefreshTokenRepo, TEST_JWT_SECRET, test_account, unverified_account,
};

// ── issue_access_token / decode_access_token ─────────────────────────────────

#[tokio::test]
async fn should_issue_access_token_that_decodes_successfully() {
    let account = test_account("alice@example.com", "hunter42");
    let (token, exp) = issue_access_token(&account, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());
    assert!(exp > 0);

    let claims = decode_access_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, account.id.to_string());
    assert_eq!(claims.exp, exp);
}

#[tokio::test]
async fn should_reject_token_signed_with_wrong_secret() {
    let account = test_account("alice@example.com", "hunter42");
    let (token, _) = issue_access_token(&account, TEST_JWT_SECRET).unwrap();

    let result = decode_access_token(&token, "wrong-secret");
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_garbage_token_string() {
    let result = decode_access_token("not-a-jwt", TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
}

#[tokio::test]
async fn should_generate_opaque_hex_tokens() {
    let a = random_token_string();
    let b = random_token_string();

    assert_eq!(a.len(), TOKEN_LEN);
    assert!(a.bytes().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

// ── AuthenticateUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_authenticate_verified_account() {
    let account = test_account("alice@example.com", "hunter42");
    let account_id = account.id;

    let refresh_tokens = MockRefreshTokenRepo::empty();
    let tokens_handle = refresh_tokens.tokens_handle();

    let usecase = AuthenticateUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        refresh_tokens,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase
        .execute(AuthenticateInput {
            email: "alice@example.com".to_owned(),
            password: "hunter42".to_owned(),
            ip: "10.0.0.1".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.account.id, account_id);
    let claims = decode_access_token(&out.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, account_id.to_string());

    let stored = tokens_handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].token, out.refresh_token.token);
    assert_eq!(stored[0].created_by_ip, "10.0.0.1");
    assert!(stored[0].is_active());
}

#[tokio::test]
async fn should_normalize_email_on_authenticate() {
    let usecase = AuthenticateUseCase {
        accounts: MockAccountRepo::new(vec![test_account("alice@example.com", "hunter42")]),
        refresh_tokens: MockRefreshTokenRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(AuthenticateInput {
            email: "  ALICE@Example.com ".to_owned(),
            password: "hunter42".to_owned(),
            ip: "10.0.0.1".to_owned(),
        })
        .await;

    assert!(result.is_ok(), "expected Ok, got {result:?}");
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let usecase = AuthenticateUseCase {
        accounts: MockAccountRepo::new(vec![test_account("alice@example.com", "hunter42")]),
        refresh_tokens: MockRefreshTokenRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(AuthenticateInput {
            email: "alice@example.com".to_owned(),
            password: "wrong".to_owned(),
            ip: "10.0.0.1".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(HrServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_email() {
    let usecase = AuthenticateUseCase {
        accounts: MockAccountRepo::empty(),
        refresh_tokens: MockRefreshTokenRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(AuthenticateInput {
            email: "nobody@example.com".to_owned(),
            password: "hunter42".to_owned(),
            ip: "10.0.0.1".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(HrServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unverified_account_with_same_error() {
    let usecase = AuthenticateUseCase {
        accounts: MockAccountRepo::new(vec![unverified_account("alice@example.com", "hunter42")]),
        refresh_tokens: MockRefreshTokenRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(AuthenticateInput {
            email: "alice@example.com".to_owned(),
            password: "hunter42".to_owned(),
            ip: "10.0.0.1".to_owned(),
        })
        .await;

    // Identical to the wrong-password error so probing cannot tell them apart.
    assert!(
        matches!(result, Err(HrServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_treat_password_reset_account_as_verified() {
    let mut account = unverified_account("alice@example.com", "hunter42");
    account.password_reset_at = Some(Utc::now());

    let usecase = AuthenticateUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        refresh_tokens: MockRefreshTokenRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(AuthenticateInput {
            email: "alice@example.com".to_owned(),
            password: "hunter42".to_owned(),
            ip: "10.0.0.1".to_owned(),
        })
        .await;

    assert!(result.is_ok(), "expected Ok, got {result:?}");
}

// ── RefreshTokenUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_rotate_refresh_token() {
    let account = test_account("alice@example.com", "hunter42");
    let presented = new_refresh_token(account.id, "10.0.0.1");
    let presented_value = presented.token.clone();

    let refresh_tokens = MockRefreshTokenRepo::new(vec![presented]);
    let tokens_handle = refresh_tokens.tokens_handle();

    let usecase = RefreshTokenUseCase {
        accounts: MockAccountRepo::new(vec![account.clone()]),
        refresh_tokens,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let out = usecase.execute(&presented_value, "10.0.0.2").await.unwrap();

    assert_eq!(out.account.id, account.id);
    assert_ne!(out.refresh_token.token, presented_value);

    let stored = tokens_handle.lock().unwrap();
    assert_eq!(stored.len(), 2);

    let old = stored.iter().find(|t| t.token == presented_value).unwrap();
    assert!(old.revoked_at.is_some());
    assert_eq!(old.revoked_by_ip.as_deref(), Some("10.0.0.2"));
    assert_eq!(
        old.replaced_by_token.as_deref(),
        Some(out.refresh_token.token.as_str())
    );

    let new = stored
        .iter()
        .find(|t| t.token == out.refresh_token.token)
        .unwrap();
    assert!(new.is_active());
    assert_eq!(new.created_by_ip, "10.0.0.2");
}

#[tokio::test]
async fn should_reject_unknown_refresh_token() {
    let usecase = RefreshTokenUseCase {
        accounts: MockAccountRepo::empty(),
        refresh_tokens: MockRefreshTokenRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute("no-such-token", "10.0.0.2").await;
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_refresh_token_without_rotating() {
    let account = test_account("alice@example.com", "hunter42");
    let mut expired = new_refresh_token(account.id, "10.0.0.1");
    expired.expires_at = Utc::now() - Duration::seconds(1);
    let expired_value = expired.token.clone();

    let refresh_tokens = MockRefreshTokenRepo::new(vec![expired]);
    let tokens_handle = refresh_tokens.tokens_handle();

    let usecase = RefreshTokenUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        refresh_tokens,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&expired_value, "10.0.0.2").await;
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
    assert_eq!(tokens_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_revoke_descendants_when_revoked_token_is_reused() {
    let account = test_account("alice@example.com", "hunter42");

    // A rotation chain: t1 -> t2 -> t3, of which only t3 is still active.
    let mut t1 = new_refresh_token(account.id, "10.0.0.1");
    let mut t2 = new_refresh_token(account.id, "10.0.0.1");
    let t3 = new_refresh_token(account.id, "10.0.0.1");
    t1.revoked_at = Some(Utc::now());
    t1.replaced_by_token = Some(t2.token.clone());
    t2.revoked_at = Some(Utc::now());
    t2.replaced_by_token = Some(t3.token.clone());
    let t1_value = t1.token.clone();
    let t3_value = t3.token.clone();

    let refresh_tokens = MockRefreshTokenRepo::new(vec![t1, t2, t3]);
    let tokens_handle = refresh_tokens.tokens_handle();

    let usecase = RefreshTokenUseCase {
        accounts: MockAccountRepo::new(vec![account]),
        refresh_tokens,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&t1_value, "10.6.6.6").await;
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );

    // Reuse of the stolen ancestor kills the whole chain.
    let stored = tokens_handle.lock().unwrap();
    let tail = stored.iter().find(|t| t.token == t3_value).unwrap();
    assert!(tail.revoked_at.is_some());
    assert_eq!(tail.revoked_by_ip.as_deref(), Some("10.6.6.6"));
    assert_eq!(stored.len(), 3, "reuse must not mint a replacement");
}

#[tokio::test]
async fn should_reject_refresh_when_account_is_gone() {
    let account = test_account("alice@example.com", "hunter42");
    let presented = new_refresh_token(account.id, "10.0.0.1");
    let presented_value = presented.token.clone();

    let usecase = RefreshTokenUseCase {
        accounts: MockAccountRepo::empty(),
        refresh_tokens: MockRefreshTokenRepo::new(vec![presented]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&presented_value, "10.0.0.2").await;
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
}

// ── RevokeTokenUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_revoke_active_token() {
    let account = test_account("alice@example.com", "hunter42");
    let token = new_refresh_token(account.id, "10.0.0.1");
    let token_value = token.token.clone();

    let refresh_tokens = MockRefreshTokenRepo::new(vec![token]);
    let tokens_handle = refresh_tokens.tokens_handle();

    let usecase = RevokeTokenUseCase { refresh_tokens };
    usecase.execute(&token_value, "10.0.0.9").await.unwrap();

    let stored = tokens_handle.lock().unwrap();
    assert!(stored[0].revoked_at.is_some());
    assert_eq!(stored[0].revoked_by_ip.as_deref(), Some("10.0.0.9"));
    assert!(!stored[0].is_active());
}

#[tokio::test]
async fn should_reject_revoking_inactive_token() {
    let account = test_account("alice@example.com", "hunter42");
    let mut token = new_refresh_token(account.id, "10.0.0.1");
    token.revoked_at = Some(Utc::now());
    let token_value = token.token.clone();

    let usecase = RevokeTokenUseCase {
        refresh_tokens: MockRefreshTokenRepo::new(vec![token]),
    };

    let result = usecase.execute(&token_value, "10.0.0.9").await;
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_revoking_expired_token() {
    let account = test_account("alice@example.com", "hunter42");
    let mut token = new_refresh_token(account.id, "10.0.0.1");
    token.expires_at = Utc::now() - Duration::seconds(1);
    let token_value = token.token.clone();

    let usecase = RevokeTokenUseCase {
        refresh_tokens: MockRefreshTokenRepo::new(vec![token]),
    };

    let result = usecase.execute(&token_value, "10.0.0.9").await;
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
}
