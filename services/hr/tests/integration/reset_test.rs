use chrono::{DateTime, Duration, Utc};

use staffdesk_hr::domain::types::{Account, TOKEN_LEN};
use staffdesk_hr::error::HrServiceError;
use staffdesk_hr::usecase::password::verify_password;
use staffdesk_hr::usecase::reset::{
    ForgotPasswordInput, ForgotPasswordUseCase, ResetPasswordInput, ResetPasswordUseCase,
    ValidateResetTokenUseCase,
};

use crate::helpers::{MockAccountRepo, MockMailer, test_account};

fn account_with_reset_token(email: &str, token: &str, expires_at: DateTime<Utc>) -> Account {
    let mut account = test_account(email, "hunter42");
    account.reset_token = Some(token.to_owned());
    account.reset_token_expires_at = Some(expires_at);
    account
}

// ── ForgotPasswordUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_set_reset_token_on_forgot_password() {
    let accounts = MockAccountRepo::new(vec![test_account("alice@example.com", "hunter42")]);
    let accounts_handle = accounts.accounts_handle();
    let mailer = MockMailer::new();
    let sent_handle = mailer.sent_handle();

    let usecase = ForgotPasswordUseCase { accounts, mailer };
    usecase
        .execute(ForgotPasswordInput {
            email: "alice@example.com".to_owned(),
            origin: None,
        })
        .await
        .unwrap();

    let stored = accounts_handle.lock().unwrap();
    let token = stored[0].reset_token.clone().unwrap();
    assert_eq!(token.len(), TOKEN_LEN);

    let expires_at = stored[0].reset_token_expires_at.unwrap();
    assert!(expires_at > Utc::now() + Duration::hours(23));
    assert!(expires_at <= Utc::now() + Duration::hours(24));

    let sent = sent_handle.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Reset Password");
    assert!(sent[0].html.contains(&token));
}

#[tokio::test]
async fn should_stay_silent_for_unknown_email() {
    let mailer = MockMailer::new();
    let sent_handle = mailer.sent_handle();

    let usecase = ForgotPasswordUseCase {
        accounts: MockAccountRepo::empty(),
        mailer,
    };

    let result = usecase
        .execute(ForgotPasswordInput {
            email: "nobody@example.com".to_owned(),
            origin: None,
        })
        .await;

    assert!(result.is_ok(), "expected Ok, got {result:?}");
    assert!(sent_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_succeed_even_when_mailer_fails() {
    let accounts = MockAccountRepo::new(vec![test_account("alice@example.com", "hunter42")]);
    let accounts_handle = accounts.accounts_handle();

    let usecase = ForgotPasswordUseCase {
        accounts,
        mailer: MockMailer::failing(),
    };

    let result = usecase
        .execute(ForgotPasswordInput {
            email: "alice@example.com".to_owned(),
            origin: None,
        })
        .await;

    assert!(result.is_ok(), "expected Ok, got {result:?}");
    // The token is in place, so a retry of the email still has something to link to.
    assert!(accounts_handle.lock().unwrap()[0].reset_token.is_some());
}

// ── ValidateResetTokenUseCase ────────────────────────────────────────────────

#[tokio::test]
async fn should_validate_live_reset_token() {
    let account = account_with_reset_token(
        "alice@example.com",
        "a-live-token",
        Utc::now() + Duration::hours(1),
    );
    let account_id = account.id;

    let usecase = ValidateResetTokenUseCase {
        accounts: MockAccountRepo::new(vec![account]),
    };

    let found = usecase.execute("a-live-token").await.unwrap();
    assert_eq!(found.id, account_id);
}

#[tokio::test]
async fn should_reject_expired_reset_token_on_validate() {
    let account = account_with_reset_token(
        "alice@example.com",
        "a-stale-token",
        Utc::now() - Duration::seconds(1),
    );

    let usecase = ValidateResetTokenUseCase {
        accounts: MockAccountRepo::new(vec![account]),
    };

    let result = usecase.execute("a-stale-token").await;
    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
}

// ── ResetPasswordUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_reset_password_with_valid_token() {
    let account = account_with_reset_token(
        "alice@example.com",
        "a-live-token",
        Utc::now() + Duration::hours(1),
    );

    let accounts = MockAccountRepo::new(vec![account]);
    let accounts_handle = accounts.accounts_handle();

    let usecase = ResetPasswordUseCase { accounts };
    usecase
        .execute(ResetPasswordInput {
            token: "a-live-token".to_owned(),
            password: "new-password".to_owned(),
        })
        .await
        .unwrap();

    let stored = accounts_handle.lock().unwrap();
    assert!(verify_password("new-password", &stored[0].password_hash));
    assert!(!verify_password("hunter42", &stored[0].password_hash));
    assert!(stored[0].password_reset_at.is_some());
    assert!(stored[0].reset_token.is_none());
    assert!(stored[0].reset_token_expires_at.is_none());
}

#[tokio::test]
async fn should_reject_reset_with_expired_token() {
    let account = account_with_reset_token(
        "alice@example.com",
        "a-stale-token",
        Utc::now() - Duration::seconds(1),
    );

    let accounts = MockAccountRepo::new(vec![account]);
    let accounts_handle = accounts.accounts_handle();

    let usecase = ResetPasswordUseCase { accounts };
    let result = usecase
        .execute(ResetPasswordInput {
            token: "a-stale-token".to_owned(),
            password: "new-password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(HrServiceError::TokenInvalid)),
        "expected TokenInvalid, got {result:?}"
    );
    let stored = accounts_handle.lock().unwrap();
    assert!(verify_password("hunter42", &stored[0].password_hash));
}

#[tokio::test]
async fn should_reject_short_password_on_reset() {
    let account = account_with_reset_token(
        "alice@example.com",
        "a-live-token",
        Utc::now() + Duration::hours(1),
    );

    let accounts = MockAccountRepo::new(vec![account]);
    let accounts_handle = accounts.accounts_handle();

    let usecase = ResetPasswordUseCase { accounts };
    let result = usecase
        .execute(ResetPasswordInput {
            token: "a-live-token".to_owned(),
            password: "short".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(HrServiceError::Validation(_))),
        "expected Validation, got {result:?}"
    );
    // Rejected before the token was consumed.
    assert!(accounts_handle.lock().unwrap()[0].reset_token.is_some());
}
