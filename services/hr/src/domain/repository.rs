#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Account, Department, EmailMessage, Position, RefreshToken, StaffRequest,
};
use crate::error::HrServiceError;

pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, HrServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, HrServiceError>;

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, HrServiceError>;

    /// Looks up an account whose reset token matches and has not expired yet.
    async fn find_by_valid_reset_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, HrServiceError>;

    async fn count(&self) -> Result<u64, HrServiceError>;

    async fn list(&self) -> Result<Vec<Account>, HrServiceError>;

    async fn create(&self, account: &Account) -> Result<(), HrServiceError>;

    /// Persists the full record; callers mutate a loaded `Account` and hand it
    /// back.
    async fn update(&self, account: &Account) -> Result<(), HrServiceError>;

    /// Returns false when no row matched the id.
    async fn delete(&self, id: Uuid) -> Result<bool, HrServiceError>;
}

pub trait RefreshTokenRepository: Send + Sync {
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, HrServiceError>;

    async fn create(&self, token: &RefreshToken) -> Result<(), HrServiceError>;

    async fn update(&self, token: &RefreshToken) -> Result<(), HrServiceError>;
}

pub trait DepartmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Department>, HrServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, HrServiceError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, HrServiceError>;

    async fn create(&self, department: &Department) -> Result<(), HrServiceError>;

    async fn update(&self, department: &Department) -> Result<(), HrServiceError>;

    async fn delete(&self, id: Uuid) -> Result<bool, HrServiceError>;
}

pub trait PositionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Position>, HrServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Position>, HrServiceError>;

    async fn find_by_title(&self, title: &str) -> Result<Option<Position>, HrServiceError>;

    async fn create(&self, position: &Position) -> Result<(), HrServiceError>;

    async fn update(&self, position: &Position) -> Result<(), HrServiceError>;

    async fn delete(&self, id: Uuid) -> Result<bool, HrServiceError>;
}

pub trait RequestRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<StaffRequest>, HrServiceError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<StaffRequest>, HrServiceError>;

    async fn create(&self, request: &StaffRequest) -> Result<(), HrServiceError>;

    async fn update(&self, request: &StaffRequest) -> Result<(), HrServiceError>;
}

pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), HrServiceError>;
}
