use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Department;
use crate::error::HrServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::department::{
    CreateDepartmentInput, CreateDepartmentUseCase, DeleteDepartmentUseCase, GetDepartmentUseCase,
    ListDepartmentsUseCase, UpdateDepartmentInput, UpdateDepartmentUseCase,
};

#[derive(Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl DepartmentResponse {
    fn from_department(department: Department) -> Self {
        Self {
            id: department.id.to_string(),
            name: department.name,
            description: department.description,
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

// ── GET /departments ─────────────────────────────────────────────────────────

pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, HrServiceError> {
    let usecase = ListDepartmentsUseCase {
        departments: state.department_repo(),
    };
    let departments = usecase.execute().await?;
    Ok(Json(
        departments
            .into_iter()
            .map(DepartmentResponse::from_department)
            .collect(),
    ))
}

// ── GET /departments/{id} ────────────────────────────────────────────────────

pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DepartmentResponse>, HrServiceError> {
    let usecase = GetDepartmentUseCase {
        departments: state.department_repo(),
    };
    let department = usecase.execute(id).await?;
    Ok(Json(DepartmentResponse::from_department(department)))
}

// ── POST /departments ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: Option<String>,
}

pub async fn create_department(
    State(state): State<AppState>,
    Json(body): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), HrServiceError> {
    let usecase = CreateDepartmentUseCase {
        departments: state.department_repo(),
    };
    let department = usecase
        .execute(CreateDepartmentInput {
            name: body.name,
            description: body.description,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DepartmentResponse::from_department(department)),
    ))
}

// ── PUT /departments/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateDepartmentRequest>,
) -> Result<Json<DepartmentResponse>, HrServiceError> {
    let usecase = UpdateDepartmentUseCase {
        departments: state.department_repo(),
    };
    let department = usecase
        .execute(
            id,
            UpdateDepartmentInput {
                name: body.name,
                description: body.description,
            },
        )
        .await?;
    Ok(Json(DepartmentResponse::from_department(department)))
}

// ── DELETE /departments/{id} ─────────────────────────────────────────────────

pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = DeleteDepartmentUseCase {
        departments: state.department_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Department deleted successfully")))
}
