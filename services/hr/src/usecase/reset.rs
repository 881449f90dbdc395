use chrono::{Duration, Utc};

use crate::domain::repository::{AccountRepository, Mailer};
use crate::domain::types::{Account, MIN_PASSWORD_LEN, RESET_TOKEN_TTL_HOURS, normalize_email};
use crate::error::HrServiceError;
use crate::usecase::email::password_reset_email;
use crate::usecase::password::hash_password;
use crate::usecase::token::random_token_string;

// ── ForgotPassword ───────────────────────────────────────────────────────────

pub struct ForgotPasswordInput {
    pub email: String,
    pub origin: Option<String>,
}

pub struct ForgotPasswordUseCase<A: AccountRepository, M: Mailer> {
    pub accounts: A,
    pub mailer: M,
}

impl<A: AccountRepository, M: Mailer> ForgotPasswordUseCase<A, M> {
    pub async fn execute(&self, input: ForgotPasswordInput) -> Result<(), HrServiceError> {
        let email = normalize_email(&input.email);

        // Unknown addresses get the same success response; no probing.
        let Some(mut account) = self.accounts.find_by_email(&email).await? else {
            return Ok(());
        };

        let now = Utc::now();
        let reset_token = random_token_string();
        account.reset_token = Some(reset_token.clone());
        account.reset_token_expires_at = Some(now + Duration::hours(RESET_TOKEN_TTL_HOURS));
        account.updated_at = now;
        self.accounts.update(&account).await?;

        let message = password_reset_email(&email, &reset_token, input.origin.as_deref());
        if let Err(e) = self.mailer.send(&message).await {
            tracing::warn!(error = %e, to = %message.to, "email delivery failed");
        }

        Ok(())
    }
}

// ── ValidateResetToken ───────────────────────────────────────────────────────

pub struct ValidateResetTokenUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> ValidateResetTokenUseCase<A> {
    pub async fn execute(&self, token: &str) -> Result<Account, HrServiceError> {
        self.accounts
            .find_by_valid_reset_token(token)
            .await?
            .ok_or(HrServiceError::TokenInvalid)
    }
}

// ── ResetPassword ────────────────────────────────────────────────────────────

pub struct ResetPasswordInput {
    pub token: String,
    pub password: String,
}

pub struct ResetPasswordUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> ResetPasswordUseCase<A> {
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), HrServiceError> {
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(HrServiceError::Validation(
                "password must be at least 6 characters".into(),
            ));
        }

        let mut account = self
            .accounts
            .find_by_valid_reset_token(&input.token)
            .await?
            .ok_or(HrServiceError::TokenInvalid)?;

        let now = Utc::now();
        account.password_hash = hash_password(&input.password)?;
        account.password_reset_at = Some(now);
        account.reset_token = None;
        account.reset_token_expires_at = None;
        account.updated_at = now;
        self.accounts.update(&account).await?;

        Ok(())
    }
}
