use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::repository::RequestRepository;
use crate::domain::types::StaffRequest;
use crate::error::HrServiceError;

/// Staff requests have no table; they live in process memory and reset on
/// restart.
#[derive(Clone, Default)]
pub struct InMemoryRequestRepository {
    requests: Arc<RwLock<Vec<StaffRequest>>>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestRepository for InMemoryRequestRepository {
    async fn list(&self) -> Result<Vec<StaffRequest>, HrServiceError> {
        Ok(self.requests.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<StaffRequest>, HrServiceError> {
        let requests = self.requests.read().await;
        Ok(requests.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, request: &StaffRequest) -> Result<(), HrServiceError> {
        self.requests.write().await.push(request.clone());
        Ok(())
    }

    async fn update(&self, request: &StaffRequest) -> Result<(), HrServiceError> {
        let mut requests = self.requests.write().await;
        let slot = requests
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or(HrServiceError::NotFound)?;
        *slot = request.clone();
        Ok(())
    }
}
