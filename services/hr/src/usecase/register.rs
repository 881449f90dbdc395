use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{AccountRepository, Mailer};
use crate::domain::types::{
    Account, EmailMessage, MIN_PASSWORD_LEN, Role, normalize_email, valid_email,
};
use crate::error::HrServiceError;
use crate::usecase::email::{already_registered_email, verification_email};
use crate::usecase::password::hash_password;
use crate::usecase::token::random_token_string;

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    /// `Origin` header of the requester, used to build email links.
    pub origin: Option<String>,
}

pub struct RegisterUseCase<A: AccountRepository, M: Mailer> {
    pub accounts: A,
    pub mailer: M,
}

impl<A: AccountRepository, M: Mailer> RegisterUseCase<A, M> {
    pub async fn execute(&self, input: RegisterInput) -> Result<(), HrServiceError> {
        let email = normalize_email(&input.email);
        if !valid_email(&email) {
            return Err(HrServiceError::Validation("invalid email address".into()));
        }
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(HrServiceError::Validation(
                "password must be at least 6 characters".into(),
            ));
        }

        // A taken email gets the same success response as a fresh one; the
        // address owner is notified by mail instead.
        if self.accounts.find_by_email(&email).await?.is_some() {
            self.send_best_effort(already_registered_email(&email, input.origin.as_deref()))
                .await;
            return Ok(());
        }

        // The very first account on a fresh install becomes the admin.
        let role = if self.accounts.count().await? == 0 {
            Role::Admin
        } else {
            Role::User
        };

        let now = Utc::now();
        let verification_token = random_token_string();
        let account = Account {
            id: Uuid::now_v7(),
            email: email.clone(),
            password_hash: hash_password(&input.password)?,
            first_name: input.first_name,
            last_name: input.last_name,
            position: input.position,
            department: input.department,
            role,
            is_active: true,
            verification_token: Some(verification_token.clone()),
            verified_at: None,
            reset_token: None,
            reset_token_expires_at: None,
            password_reset_at: None,
            created_at: now,
            updated_at: now,
        };
        self.accounts.create(&account).await?;

        self.send_best_effort(verification_email(
            &email,
            &verification_token,
            input.origin.as_deref(),
        ))
        .await;

        Ok(())
    }

    /// Mail failures must not fail the registration; log and move on.
    async fn send_best_effort(&self, message: EmailMessage) {
        if let Err(e) = self.mailer.send(&message).await {
            tracing::warn!(error = %e, to = %message.to, "email delivery failed");
        }
    }
}

// ── VerifyEmail ──────────────────────────────────────────────────────────────

pub struct VerifyEmailUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> VerifyEmailUseCase<A> {
    pub async fn execute(&self, token: &str) -> Result<(), HrServiceError> {
        let mut account = self
            .accounts
            .find_by_verification_token(token)
            .await?
            .ok_or(HrServiceError::VerificationFailed)?;

        let now = Utc::now();
        account.verified_at = Some(now);
        account.verification_token = None;
        account.updated_at = now;
        self.accounts.update(&account).await?;

        Ok(())
    }
}
