use rand::RngExt;

use crate::domain::repository::RequestRepository;
use crate::domain::types::{RequestKind, RequestStatus, StaffRequest};
use crate::error::HrServiceError;

const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const REQUEST_ID_LEN: usize = 7;

/// Short base-36 id, e.g. "k3f9x2q". Requests never hit the database, so a
/// compact human-pasteable id beats a UUID here.
pub fn generate_request_id() -> String {
    let mut rng = rand::rng();
    (0..REQUEST_ID_LEN)
        .map(|_| ID_CHARSET[rng.random_range(0..ID_CHARSET.len())] as char)
        .collect()
}

// ── ListRequests ─────────────────────────────────────────────────────────────

pub struct ListRequestsUseCase<R: RequestRepository> {
    pub requests: R,
}

impl<R: RequestRepository> ListRequestsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<StaffRequest>, HrServiceError> {
        self.requests.list().await
    }
}

// ── GetRequest ───────────────────────────────────────────────────────────────

pub struct GetRequestUseCase<R: RequestRepository> {
    pub requests: R,
}

impl<R: RequestRepository> GetRequestUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<StaffRequest, HrServiceError> {
        self.requests
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)
    }
}

// ── CreateRequest ────────────────────────────────────────────────────────────

pub struct CreateRequestInput {
    pub kind: RequestKind,
    pub employee_email: String,
    pub employee_role: Option<String>,
    pub items: String,
    pub status: Option<RequestStatus>,
}

pub struct CreateRequestUseCase<R: RequestRepository> {
    pub requests: R,
}

impl<R: RequestRepository> CreateRequestUseCase<R> {
    pub async fn execute(&self, input: CreateRequestInput) -> Result<StaffRequest, HrServiceError> {
        let request = StaffRequest {
            id: generate_request_id(),
            kind: input.kind,
            employee_email: input.employee_email,
            employee_role: input
                .employee_role
                .unwrap_or_else(|| "Normal User".to_string()),
            items: input.items,
            status: input.status.unwrap_or(RequestStatus::Pending),
        };
        self.requests.create(&request).await?;

        Ok(request)
    }
}

// ── UpdateRequest ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateRequestInput {
    pub kind: Option<RequestKind>,
    pub employee_email: Option<String>,
    pub employee_role: Option<String>,
    pub items: Option<String>,
    pub status: Option<RequestStatus>,
}

pub struct UpdateRequestUseCase<R: RequestRepository> {
    pub requests: R,
}

impl<R: RequestRepository> UpdateRequestUseCase<R> {
    pub async fn execute(
        &self,
        id: &str,
        input: UpdateRequestInput,
    ) -> Result<StaffRequest, HrServiceError> {
        let mut request = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)?;

        if let Some(kind) = input.kind {
            request.kind = kind;
        }
        if let Some(employee_email) = input.employee_email {
            request.employee_email = employee_email;
        }
        if let Some(employee_role) = input.employee_role {
            request.employee_role = employee_role;
        }
        if let Some(items) = input.items {
            request.items = items;
        }
        if let Some(status) = input.status {
            request.status = status;
        }

        self.requests.update(&request).await?;

        Ok(request)
    }
}
