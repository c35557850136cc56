//! SMTP delivery through an authenticated STARTTLS relay.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, info};

use hr_core::services::mail::{Mailer, OutgoingMail};
use hr_shared::validation::mask_email;
use hr_shared::MailConfig;

use crate::InfrastructureError;

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build the transport; no connection is opened until the first send
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "MAIL_USERNAME and MAIL_PASSWORD are required for SMTP".to_string(),
            ));
        }

        let from: Mailbox = config.from_address.parse().map_err(|e| {
            InfrastructureError::Config(format!(
                "Invalid sender address {}: {}",
                config.from_address, e
            ))
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Mail(format!("Invalid SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.send_timeout_secs)))
            .build();

        Ok(Self { transport, from })
    }

    pub(crate) fn build_message(&self, mail: &OutgoingMail) -> Result<Message, InfrastructureError> {
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build message: {}", e)))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<String, String> {
        let message = self.build_message(mail).map_err(|e| e.to_string())?;
        debug!(to = %mask_email(&mail.to), "Sending mail over SMTP");

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| format!("SMTP delivery failed: {}", e))?;

        let reply = response.message().collect::<Vec<_>>().join(" ");
        info!(
            target: "mail_service",
            provider = "smtp",
            to = %mask_email(&mail.to),
            code = %response.code(),
            "Mail delivered"
        );
        Ok(reply)
    }
}
