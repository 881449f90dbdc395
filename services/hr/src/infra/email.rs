use anyhow::Context as _;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::domain::repository::Mailer;
use crate::domain::types::EmailMessage;
use crate::error::HrServiceError;

#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: String,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
        from: &str,
    ) -> Result<Self, anyhow::Error> {
        let transport = SmtpTransport::relay(host)
            .context("build smtp transport")?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .port(port)
            .build();

        Ok(Self {
            transport,
            from: from.to_string(),
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), HrServiceError> {
        let email = Message::builder()
            .from(self.from.parse().context("parse sender address")?)
            .to(message.to.parse().context("parse recipient address")?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())
            .context("build email")?;

        // lettre's SmtpTransport is blocking; run the send off the async
        // runtime.
        let transport = self.transport.clone();
        tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .context("join email send task")?
            .context("smtp send")?;

        Ok(())
    }
}
