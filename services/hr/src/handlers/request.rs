use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{RequestKind, RequestStatus, StaffRequest};
use crate::error::HrServiceError;
use crate::state::AppState;
use crate::usecase::request::{
    CreateRequestInput, CreateRequestUseCase, GetRequestUseCase, ListRequestsUseCase,
    UpdateRequestInput, UpdateRequestUseCase,
};

#[derive(Serialize)]
pub struct RequestResponse {
    pub id: String,
    pub kind: RequestKind,
    pub employee_email: String,
    pub employee_role: String,
    pub items: String,
    pub status: RequestStatus,
}

impl RequestResponse {
    fn from_request(request: StaffRequest) -> Self {
        Self {
            id: request.id,
            kind: request.kind,
            employee_email: request.employee_email,
            employee_role: request.employee_role,
            items: request.items,
            status: request.status,
        }
    }
}

/// Mutations echo the request back with a confirmation message.
#[derive(Serialize)]
pub struct RequestMutationResponse {
    pub message: String,
    pub request: RequestResponse,
}

// ── GET /requests ────────────────────────────────────────────────────────────

pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequestResponse>>, HrServiceError> {
    let usecase = ListRequestsUseCase {
        requests: state.request_repo(),
    };
    let requests = usecase.execute().await?;
    Ok(Json(
        requests
            .into_iter()
            .map(RequestResponse::from_request)
            .collect(),
    ))
}

// ── GET /requests/{id} ───────────────────────────────────────────────────────

pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RequestResponse>, HrServiceError> {
    let usecase = GetRequestUseCase {
        requests: state.request_repo(),
    };
    let request = usecase.execute(&id).await?;
    Ok(Json(RequestResponse::from_request(request)))
}

// ── POST /requests ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRequestRequest {
    pub kind: RequestKind,
    pub employee_email: String,
    pub employee_role: Option<String>,
    pub items: String,
    pub status: Option<RequestStatus>,
}

pub async fn create_request(
    State(state): State<AppState>,
    Json(body): Json<CreateRequestRequest>,
) -> Result<(StatusCode, Json<RequestMutationResponse>), HrServiceError> {
    let usecase = CreateRequestUseCase {
        requests: state.request_repo(),
    };
    let request = usecase
        .execute(CreateRequestInput {
            kind: body.kind,
            employee_email: body.employee_email,
            employee_role: body.employee_role,
            items: body.items,
            status: body.status,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RequestMutationResponse {
            message: "Request successfully created".to_string(),
            request: RequestResponse::from_request(request),
        }),
    ))
}

// ── PUT /requests/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRequestRequest {
    pub kind: Option<RequestKind>,
    pub employee_email: Option<String>,
    pub employee_role: Option<String>,
    pub items: Option<String>,
    pub status: Option<RequestStatus>,
}

pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateRequestRequest>,
) -> Result<Json<RequestMutationResponse>, HrServiceError> {
    let usecase = UpdateRequestUseCase {
        requests: state.request_repo(),
    };
    let request = usecase
        .execute(
            &id,
            UpdateRequestInput {
                kind: body.kind,
                employee_email: body.employee_email,
                employee_role: body.employee_role,
                items: body.items,
                status: body.status,
            },
        )
        .await?;
    Ok(Json(RequestMutationResponse {
        message: "Request successfully updated".to_string(),
        request: RequestResponse::from_request(request),
    }))
}
