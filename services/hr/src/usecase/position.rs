use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::PositionRepository;
use crate::domain::types::Position;
use crate::error::HrServiceError;

// ── ListPositions ────────────────────────────────────────────────────────────

pub struct ListPositionsUseCase<P: PositionRepository> {
    pub positions: P,
}

impl<P: PositionRepository> ListPositionsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Position>, HrServiceError> {
        self.positions.list().await
    }
}

// ── GetPosition ──────────────────────────────────────────────────────────────

pub struct GetPositionUseCase<P: PositionRepository> {
    pub positions: P,
}

impl<P: PositionRepository> GetPositionUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<Position, HrServiceError> {
        self.positions
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)
    }
}

// ── CreatePosition ───────────────────────────────────────────────────────────

pub struct CreatePositionInput {
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub employee_count: Option<i32>,
}

pub struct CreatePositionUseCase<P: PositionRepository> {
    pub positions: P,
}

impl<P: PositionRepository> CreatePositionUseCase<P> {
    pub async fn execute(&self, input: CreatePositionInput) -> Result<Position, HrServiceError> {
        if self.positions.find_by_title(&input.title).await?.is_some() {
            return Err(HrServiceError::AlreadyExists);
        }

        let now = Utc::now();
        let position = Position {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            department: input.department,
            employee_count: input.employee_count.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };
        self.positions.create(&position).await?;

        Ok(position)
    }
}

// ── UpdatePosition ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdatePositionInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub department: Option<String>,
    pub employee_count: Option<i32>,
}

pub struct UpdatePositionUseCase<P: PositionRepository> {
    pub positions: P,
}

impl<P: PositionRepository> UpdatePositionUseCase<P> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdatePositionInput,
    ) -> Result<Position, HrServiceError> {
        let mut position = self
            .positions
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)?;

        if let Some(title) = input.title {
            if title != position.title && self.positions.find_by_title(&title).await?.is_some() {
                return Err(HrServiceError::AlreadyExists);
            }
            position.title = title;
        }
        if let Some(description) = input.description {
            position.description = Some(description);
        }
        if let Some(department) = input.department {
            position.department = Some(department);
        }
        if let Some(employee_count) = input.employee_count {
            position.employee_count = employee_count;
        }

        position.updated_at = Utc::now();
        self.positions.update(&position).await?;

        Ok(position)
    }
}

// ── DeletePosition ───────────────────────────────────────────────────────────

pub struct DeletePositionUseCase<P: PositionRepository> {
    pub positions: P,
}

impl<P: PositionRepository> DeletePositionUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<(), HrServiceError> {
        if !self.positions.delete(id).await? {
            return Err(HrServiceError::NotFound);
        }
        Ok(())
    }
}
