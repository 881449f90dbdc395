use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Position;
use crate::error::HrServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::position::{
    CreatePositionInput, CreatePositionUseCase, DeletePositionUseCase, GetPositionUseCase,
    ListPositionsUseCase, UpdatePositionInput, UpdatePositionUseCase,
};

#[derive(Serialize)]
pub struct PositionResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub employee_count: i32,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "staffdesk_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl PositionResponse {
    fn from_position(position: Position) -> Self {
        Self {
            id: position.id.to_string(),
            title: position.title,
            description: position.description,
            department: position.department,
            employee_count: position.employee_count,
            created_at: position.created_at,
            updated_at: position.updated_at,
        }
    }
}

// ── GET /positions ───────────────────────────────────────────────────────────

pub async fn list_positions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PositionResponse>>, HrServiceError> {
    let usecase = ListPositionsUseCase {
        positions: state.position_repo(),
    };
    let positions = usecase.execute().await?;
    Ok(Json(
        positions
            .into_iter()
            .map(PositionResponse::from_position)
            .collect(),
    ))
}

// ── GET /positions/{id} ──────────────────────────────────────────────────────

pub async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PositionResponse>, HrServiceError> {
    let usecase = GetPositionUseCase {
        positions: state.position_repo(),
    };
    let position = usecase.execute(id).await?;
    Ok(Json(PositionResponse::from_position(position)))
}

// ── POST /positions ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePositionRequest {
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub employee_count: Option<i32>,
}

pub async fn create_position(
    State(state): State<AppState>,
    Json(body): Json<CreatePositionRequest>,
) -> Result<(StatusCode, Json<PositionResponse>), HrServiceError> {
    let usecase = CreatePositionUseCase {
        positions: state.position_repo(),
    };
    let position = usecase
        .execute(CreatePositionInput {
            title: body.title,
            description: body.description,
            department: body.department,
            employee_count: body.employee_count,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(PositionResponse::from_position(position)),
    ))
}

// ── PUT /positions/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePositionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub employee_count: Option<i32>,
}

pub async fn update_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePositionRequest>,
) -> Result<Json<PositionResponse>, HrServiceError> {
    let usecase = UpdatePositionUseCase {
        positions: state.position_repo(),
    };
    let position = usecase
        .execute(
            id,
            UpdatePositionInput {
                title: body.title,
                description: body.description,
                department: body.department,
                employee_count: body.employee_count,
            },
        )
        .await?;
    Ok(Json(PositionResponse::from_position(position)))
}

// ── DELETE /positions/{id} ───────────────────────────────────────────────────

pub async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, HrServiceError> {
    let usecase = DeletePositionUseCase {
        positions: state.position_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Position deleted successfully")))
}
