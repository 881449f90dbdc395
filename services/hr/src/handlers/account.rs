use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Account, Role};
use crate::error::HrServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::account::{
    CreateAccountInput, CreateAccountUseCase, DeleteAccountUseCase, GetAccountUseCase,
    ListAccountsUseCase, UpdateAccountInput, UpdateAccountUseCase,
};

/// Public projection of an account. The password hash and pending tokens
/// never leave the service.
#[derive(Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub is_verified: bool,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AccountResponse {
    pub fn from_account(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            position: account.position,
            department: account.department,
            role: account.role,
            is_active: account.is_active,
            is_verified: account.is_verified(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

// ── GET /accounts ────────────────────────────────────────────────────────────

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, HrServiceError> {
    let usecase = ListAccountsUseCase {
        accounts: state.account_repo(),
    };
    let accounts = usecase.execute().await?;
    Ok(Json(
        accounts.into_iter().map(AccountResponse::from_account).collect(),
    ))
}

// ── GET /accounts/{id} ───────────────────────────────────────────────────────

pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountResponse>, HrServiceError> {
    let usecase = GetAccountUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase.execute(id).await?;
    Ok(Json(AccountResponse::from_account(account)))
}

// ── POST /accounts ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub role: Role,
}

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), HrServiceError> {
    let usecase = CreateAccountUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase
        .execute(CreateAccountInput {
            email: body.email,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
            position: body.position,
            department: body.department,
            role: body.role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from_account(account))))
}

// ── PUT /accounts/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAccountRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, HrServiceError> {
    let usecase = UpdateAccountUseCase {
        accounts: state.account_repo(),
    };
    let account = usecase
        .execute(
            id,
            UpdateAccountInput {
                email: body.email,
                password: body.password,
                first_name: body.first_name,
                last_name: body.last_name,
                position: body.position,
                department: body.department,
                role: body.role,
                is_active: body.is_active,
            },
        )
        .await?;
    Ok(Json(AccountResponse::from_account(account)))
}

// ── DELETE /accounts/{id} ────────────────────────────────────────────────────

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = DeleteAccountUseCase {
        accounts: state.account_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Account deleted successfully")))
}
