use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::DepartmentRepository;
use crate::domain::types::Department;
use crate::error::HrServiceError;

// ── ListDepartments ──────────────────────────────────────────────────────────

pub struct ListDepartmentsUseCase<D: DepartmentRepository> {
    pub departments: D,
}

impl<D: DepartmentRepository> ListDepartmentsUseCase<D> {
    pub async fn execute(&self) -> Result<Vec<Department>, HrServiceError> {
        self.departments.list().await
    }
}

// ── GetDepartment ────────────────────────────────────────────────────────────

pub struct GetDepartmentUseCase<D: DepartmentRepository> {
    pub departments: D,
}

impl<D: DepartmentRepository> GetDepartmentUseCase<D> {
    pub async fn execute(&self, id: Uuid) -> Result<Department, HrServiceError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)
    }
}

// ── CreateDepartment ─────────────────────────────────────────────────────────

pub struct CreateDepartmentInput {
    pub name: String,
    pub description: Option<String>,
}

pub struct CreateDepartmentUseCase<D: DepartmentRepository> {
    pub departments: D,
}

impl<D: DepartmentRepository> CreateDepartmentUseCase<D> {
    pub async fn execute(&self, input: CreateDepartmentInput) -> Result<Department, HrServiceError> {
        if self.departments.find_by_name(&input.name).await?.is_some() {
            return Err(HrServiceError::AlreadyExists);
        }

        let now = Utc::now();
        let department = Department {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        self.departments.create(&department).await?;

        Ok(department)
    }
}

// ── UpdateDepartment ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateDepartmentInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct UpdateDepartmentUseCase<D: DepartmentRepository> {
    pub departments: D,
}

impl<D: DepartmentRepository> UpdateDepartmentUseCase<D> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateDepartmentInput,
    ) -> Result<Department, HrServiceError> {
        let mut department = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or(HrServiceError::NotFound)?;

        if let Some(name) = input.name {
            if name != department.name && self.departments.find_by_name(&name).await?.is_some() {
                return Err(HrServiceError::AlreadyExists);
            }
            department.name = name;
        }
        if let Some(description) = input.description {
            department.description = Some(description);
        }

        department.updated_at = Utc::now();
        self.departments.update(&department).await?;

        Ok(department)
    }
}

// ── DeleteDepartment ─────────────────────────────────────────────────────────

pub struct DeleteDepartmentUseCase<D: DepartmentRepository> {
    pub departments: D,
}

impl<D: DepartmentRepository> DeleteDepartmentUseCase<D> {
    pub async fn execute(&self, id: Uuid) -> Result<(), HrServiceError> {
        if !self.departments.delete(id).await? {
            return Err(HrServiceError::NotFound);
        }
        Ok(())
    }
}
