use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAccountRepository, DbDepartmentRepository, DbPositionRepository, DbRefreshTokenRepository,
};
use crate::infra::email::SmtpMailer;
use crate::infra::memstore::InMemoryRequestRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub mailer: SmtpMailer,
    pub requests: InMemoryRequestRepository,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn refresh_token_repo(&self) -> DbRefreshTokenRepository {
        DbRefreshTokenRepository {
            db: self.db.clone(),
        }
    }

    pub fn department_repo(&self) -> DbDepartmentRepository {
        DbDepartmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn position_repo(&self) -> DbPositionRepository {
        DbPositionRepository {
            db: self.db.clone(),
        }
    }

    pub fn request_repo(&self) -> InMemoryRequestRepository {
        self.requests.clone()
    }

    pub fn mailer(&self) -> SmtpMailer {
        self.mailer.clone()
    }
}
