/// HR service configuration loaded from environment variables.
#[derive(Debug)]
pub struct HrConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing JWT access tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 4000). Env var: `HR_PORT`.
    pub hr_port: u16,
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP relay port (default 587). Env var: `SMTP_PORT`.
    pub smtp_port: u16,
    /// SMTP username.
    pub smtp_username: String,
    /// SMTP password.
    pub smtp_password: String,
    /// Sender address for outgoing mail.
    pub email_from: String,
}

impl HrConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            hr_port: std::env::var("HR_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
            smtp_host: std::env::var("SMTP_HOST").expect("SMTP_HOST"),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME"),
            smtp_password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD"),
            email_from: std::env::var("EMAIL_FROM").expect("EMAIL_FROM"),
        }
    }
}
