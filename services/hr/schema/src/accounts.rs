use sea_orm::entity::prelude::*;

/// Employee account record: credentials, profile, and the verification /
/// password-reset state machine.
///
/// `password_hash` is stored here but never leaves the service in a response
/// body; projection happens at the handler DTO boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    /// 0 = User, 1 = Admin.
    pub role: i16,
    pub is_active: bool,
    /// Present only while the account is awaiting email verification.
    pub verification_token: Option<String>,
    pub verified_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Present only during an active password-reset window.
    pub reset_token: Option<String>,
    pub reset_token_expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub password_reset_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::refresh_tokens::Entity")]
    RefreshTokens,
}

impl Related<super::refresh_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefreshTokens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
