use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::AccountRepository;
use crate::domain::types::{
    Account, MIN_PASSWORD_LEN, Role, normalize_email, valid_email,
};
use crate::error::HrServiceError;
use crate::usecase::password::hash_password;

// ── ListAccounts ─────────────────────────────────────────────────────────────

pub struct ListAccountsUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> ListAccountsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<Account>, HrServiceError> {
        self.accounts.list().await
    }
}

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> GetAccountUseCase<A> {
    pub async fn execute(&self, id: Uuid) -> Result<Account, HrServiceError> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)
    }
}

// ── CreateAccount ────────────────────────────────────────────────────────────

pub struct CreateAccountInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub role: Role,
}

pub struct CreateAccountUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> CreateAccountUseCase<A> {
    /// Admin-created accounts skip email verification entirely.
    pub async fn execute(&self, input: CreateAccountInput) -> Result<Account, HrServiceError> {
        let email = normalize_email(&input.email);
        if !valid_email(&email) {
            return Err(HrServiceError::Validation("invalid email address".into()));
        }
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(HrServiceError::Validation(
                "password must be at least 6 characters".into(),
            ));
        }
        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(HrServiceError::AlreadyExists);
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::now_v7(),
            email,
            password_hash: hash_password(&input.password)?,
            first_name: input.first_name,
            last_name: input.last_name,
            position: input.position,
            department: input.department,
            role: input.role,
            is_active: true,
            verification_token: None,
            verified_at: Some(now),
            reset_token: None,
            reset_token_expires_at: None,
            password_reset_at: None,
            created_at: now,
            updated_at: now,
        };
        self.accounts.create(&account).await?;

        Ok(account)
    }
}

// ── UpdateAccount ────────────────────────────────────────────────────────────

/// Absent fields stay untouched.
#[derive(Default)]
pub struct UpdateAccountInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

pub struct UpdateAccountUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> UpdateAccountUseCase<A> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateAccountInput,
    ) -> Result<Account, HrServiceError> {
        let mut account = self
            .accounts
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)?;

        if let Some(email) = input.email {
            let email = normalize_email(&email);
            if !valid_email(&email) {
                return Err(HrServiceError::Validation("invalid email address".into()));
            }
            if email != account.email && self.accounts.find_by_email(&email).await?.is_some() {
                return Err(HrServiceError::AlreadyExists);
            }
            account.email = email;
        }

        if let Some(password) = input.password {
            if password.len() < MIN_PASSWORD_LEN {
                return Err(HrServiceError::Validation(
                    "password must be at least 6 characters".into(),
                ));
            }
            account.password_hash = hash_password(&password)?;
        }

        if let Some(first_name) = input.first_name {
            account.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            account.last_name = last_name;
        }
        if let Some(position) = input.position {
            account.position = Some(position);
        }
        if let Some(department) = input.department {
            account.department = Some(department);
        }
        if let Some(role) = input.role {
            account.role = role;
        }
        if let Some(is_active) = input.is_active {
            account.is_active = is_active;
        }

        account.updated_at = Utc::now();
        self.accounts.update(&account).await?;

        Ok(account)
    }
}

// ── DeleteAccount ────────────────────────────────────────────────────────────

pub struct DeleteAccountUseCase<A: AccountRepository> {
    pub accounts: A,
}

impl<A: AccountRepository> DeleteAccountUseCase<A> {
    /// Refresh tokens go with the account via the FK cascade.
    pub async fn execute(&self, id: Uuid) -> Result<(), HrServiceError> {
        if !self.accounts.delete(id).await? {
            return Err(HrServiceError::NotFound);
        }
        Ok(())
    }
}
