use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. The first account ever registered is promoted to Admin;
/// every later registration defaults to User.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_i16(self) -> i16 {
        match self {
            Role::User => 0,
            Role::Admin => 1,
        }
    }

    pub fn from_i16(value: i16) -> Self {
        match value {
            1 => Role::Admin,
            _ => Role::User,
        }
    }
}

/// Employee account with credentials and verification state.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub department: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub verification_token: Option<String>,
    pub verified_at: Option<DateTime<Utc>>,
    pub reset_token: Option<String>,
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    pub password_reset_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// An account that completed a password reset is implicitly verified even
    /// if it never clicked the verification link.
    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some() || self.password_reset_at.is_some()
    }
}

/// One issued long-lived session credential.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: Uuid,
    pub account_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_by_ip: String,
    pub revoked_at: Option<DateTime<Utc>>,
    pub revoked_by_ip: Option<String>,
    pub replaced_by_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none() && !self.is_expired()
    }
}

/// Organizational department.
#[derive(Debug, Clone)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job position.
#[derive(Debug, Clone)]
pub struct Position {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub department: Option<String>,
    pub employee_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kind of an internal staff request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    Equipment,
    Leave,
}

/// Approval state of a staff request. New requests start Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
}

/// Internal equipment/leave request. Lives in the in-memory store only —
/// there is no database table behind this feature.
#[derive(Debug, Clone)]
pub struct StaffRequest {
    pub id: String,
    pub kind: RequestKind,
    pub employee_email: String,
    /// Free-form display string, e.g. "Normal User".
    pub employee_role: String,
    pub items: String,
    pub status: RequestStatus,
}

/// Outgoing email, ready for the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Access-token lifetime in seconds (15 minutes).
pub const ACCESS_TOKEN_TTL_SECS: u64 = 15 * 60;

/// Refresh-token lifetime in days.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Password-reset token lifetime in hours.
pub const RESET_TOKEN_TTL_HOURS: i64 = 24;

/// Opaque token length in hex characters (40 bytes of entropy).
pub const TOKEN_LEN: usize = 80;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Lower-case and trim an email for storage and lookup. All reads and writes
/// go through this so the unique index sees one canonical form.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Structural email check: non-empty local part, one '@', a dot in the domain.
pub fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
