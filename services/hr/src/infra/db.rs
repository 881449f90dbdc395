use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use staffdesk_hr_schema::{accounts, departments, positions, refresh_tokens};

use crate::domain::repository::{
    AccountRepository, DepartmentRepository, PositionRepository, RefreshTokenRepository,
};
use crate::domain::types::{Account, Department, Position, RefreshToken, Role};
use crate::error::HrServiceError;

// ── Account repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, HrServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, HrServiceError> {
        let model = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find account by id")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, HrServiceError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::VerificationToken.eq(token))
            .one(&self.db)
            .await
            .context("find account by verification token")?;
        Ok(model.map(account_from_model))
    }

    async fn find_by_valid_reset_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, HrServiceError> {
        let now = Utc::now();
        let model = accounts::Entity::find()
            .filter(accounts::Column::ResetToken.eq(token))
            .filter(accounts::Column::ResetTokenExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find account by reset token")?;
        Ok(model.map(account_from_model))
    }

    async fn count(&self) -> Result<u64, HrServiceError> {
        use sea_orm::PaginatorTrait;
        let count = accounts::Entity::find()
            .count(&self.db)
            .await
            .context("count accounts")?;
        Ok(count)
    }

    async fn list(&self) -> Result<Vec<Account>, HrServiceError> {
        let models = accounts::Entity::find()
            .all(&self.db)
            .await
            .context("list accounts")?;
        Ok(models.into_iter().map(account_from_model).collect())
    }

    async fn create(&self, account: &Account) -> Result<(), HrServiceError> {
        account_to_active_model(account)
            .insert(&self.db)
            .await
            .context("create account")?;
        Ok(())
    }

    async fn update(&self, account: &Account) -> Result<(), HrServiceError> {
        account_to_active_model(account)
            .update(&self.db)
            .await
            .context("update account")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HrServiceError> {
        let result = accounts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete account")?;
        Ok(result.rows_affected > 0)
    }
}

fn account_to_active_model(account: &Account) -> accounts::ActiveModel {
    accounts::ActiveModel {
        id: Set(account.id),
        email: Set(account.email.clone()),
        password_hash: Set(account.password_hash.clone()),
        first_name: Set(account.first_name.clone()),
        last_name: Set(account.last_name.clone()),
        position: Set(account.position.clone()),
        department: Set(account.department.clone()),
        role: Set(account.role.as_i16()),
        is_active: Set(account.is_active),
        verification_token: Set(account.verification_token.clone()),
        verified_at: Set(account.verified_at),
        reset_token: Set(account.reset_token.clone()),
        reset_token_expires_at: Set(account.reset_token_expires_at),
        password_reset_at: Set(account.password_reset_at),
        created_at: Set(account.created_at),
        updated_at: Set(account.updated_at),
    }
}

fn account_from_model(model: accounts::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        first_name: model.first_name,
        last_name: model.last_name,
        position: model.position,
        department: model.department,
        role: Role::from_i16(model.role),
        is_active: model.is_active,
        verification_token: model.verification_token,
        verified_at: model.verified_at,
        reset_token: model.reset_token,
        reset_token_expires_at: model.reset_token_expires_at,
        password_reset_at: model.password_reset_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── RefreshToken repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRefreshTokenRepository {
    pub db: DatabaseConnection,
}

impl RefreshTokenRepository for DbRefreshTokenRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, HrServiceError> {
        let model = refresh_tokens::Entity::find()
            .filter(refresh_tokens::Column::Token.eq(token))
            .one(&self.db)
            .await
            .context("find refresh token")?;
        Ok(model.map(refresh_token_from_model))
    }

    async fn create(&self, token: &RefreshToken) -> Result<(), HrServiceError> {
        refresh_token_to_active_model(token)
            .insert(&self.db)
            .await
            .context("create refresh token")?;
        Ok(())
    }

    async fn update(&self, token: &RefreshToken) -> Result<(), HrServiceError> {
        refresh_token_to_active_model(token)
            .update(&self.db)
            .await
            .context("update refresh token")?;
        Ok(())
    }
}

fn refresh_token_to_active_model(token: &RefreshToken) -> refresh_tokens::ActiveModel {
    refresh_tokens::ActiveModel {
        id: Set(token.id),
        account_id: Set(token.account_id),
        token: Set(token.token.clone()),
        expires_at: Set(token.expires_at),
        created_by_ip: Set(token.created_by_ip.clone()),
        revoked_at: Set(token.revoked_at),
        revoked_by_ip: Set(token.revoked_by_ip.clone()),
        replaced_by_token: Set(token.replaced_by_token.clone()),
        created_at: Set(token.created_at),
    }
}

fn refresh_token_from_model(model: refresh_tokens::Model) -> RefreshToken {
    RefreshToken {
        id: model.id,
        account_id: model.account_id,
        token: model.token,
        expires_at: model.expires_at,
        created_by_ip: model.created_by_ip,
        revoked_at: model.revoked_at,
        revoked_by_ip: model.revoked_by_ip,
        replaced_by_token: model.replaced_by_token,
        created_at: model.created_at,
    }
}

// ── Department repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDepartmentRepository {
    pub db: DatabaseConnection,
}

impl DepartmentRepository for DbDepartmentRepository {
    async fn list(&self) -> Result<Vec<Department>, HrServiceError> {
        let models = departments::Entity::find()
            .all(&self.db)
            .await
            .context("list departments")?;
        Ok(models.into_iter().map(department_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, HrServiceError> {
        let model = departments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find department by id")?;
        Ok(model.map(department_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, HrServiceError> {
        let model = departments::Entity::find()
            .filter(departments::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find department by name")?;
        Ok(model.map(department_from_model))
    }

    async fn create(&self, department: &Department) -> Result<(), HrServiceError> {
        departments::ActiveModel {
            id: Set(department.id),
            name: Set(department.name.clone()),
            description: Set(department.description.clone()),
            created_at: Set(department.created_at),
            updated_at: Set(department.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create department")?;
        Ok(())
    }

    async fn update(&self, department: &Department) -> Result<(), HrServiceError> {
        departments::ActiveModel {
            id: Set(department.id),
            name: Set(department.name.clone()),
            description: Set(department.description.clone()),
            created_at: Set(department.created_at),
            updated_at: Set(department.updated_at),
        }
        .update(&self.db)
        .await
        .context("update department")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HrServiceError> {
        let result = departments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete department")?;
        Ok(result.rows_affected > 0)
    }
}

fn department_from_model(model: departments::Model) -> Department {
    Department {
        id: model.id,
        name: model.name,
        description: model.description,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Position repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPositionRepository {
    pub db: DatabaseConnection,
}

impl PositionRepository for DbPositionRepository {
    async fn list(&self) -> Result<Vec<Position>, HrServiceError> {
        let models = positions::Entity::find()
            .all(&self.db)
            .await
            .context("list positions")?;
        Ok(models.into_iter().map(position_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Position>, HrServiceError> {
        let model = positions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find position by id")?;
        Ok(model.map(position_from_model))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Position>, HrServiceError> {
        let model = positions::Entity::find()
            .filter(positions::Column::Title.eq(title))
            .one(&self.db)
            .await
            .context("find position by title")?;
        Ok(model.map(position_from_model))
    }

    async fn create(&self, position: &Position) -> Result<(), HrServiceError> {
        position_to_active_model(position)
            .insert(&self.db)
            .await
            .context("create position")?;
        Ok(())
    }

    async fn update(&self, position: &Position) -> Result<(), HrServiceError> {
        position_to_active_model(position)
            .update(&self.db)
            .await
            .context("update position")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, HrServiceError> {
        let result = positions::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete position")?;
        Ok(result.rows_affected > 0)
    }
}

fn position_to_active_model(position: &Position) -> positions::ActiveModel {
    positions::ActiveModel {
        id: Set(position.id),
        title: Set(position.title.clone()),
        description: Set(position.description.clone()),
        department: Set(position.department.clone()),
        employee_count: Set(position.employee_count),
        created_at: Set(position.created_at),
        updated_at: Set(position.updated_at),
    }
}

fn position_from_model(model: positions::Model) -> Position {
    Position {
        id: model.id,
        title: model.title,
        description: model.description,
        department: model.department,
        employee_count: model.employee_count,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
