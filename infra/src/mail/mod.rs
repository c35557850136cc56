//! Mail Service Module
//!
//! Delivery of password reset messages. Two implementations of the core
//! `Mailer` trait are provided:
//!
//! - **SMTP**: STARTTLS relay with authenticated sender, via lettre
//! - **Mock**: records messages in memory and logs them, for development and tests

mod mock_mailer;
mod smtp_mailer;

pub use mock_mailer::MockMailer;
pub use smtp_mailer::SmtpMailer;

use std::sync::Arc;

use hr_core::services::mail::Mailer;
use hr_shared::config::MailProvider;
use hr_shared::MailConfig;

#[cfg(test)]
mod tests;

/// Build the mailer selected by configuration
///
/// Falls back to the mock when SMTP is requested but cannot be set up.
pub fn create_mailer(config: &MailConfig) -> Arc<dyn Mailer> {
    match config.provider {
        MailProvider::Mock => {
            tracing::info!("Using mock mailer");
            Arc::new(MockMailer::new())
        }
        MailProvider::Smtp => match SmtpMailer::new(config) {
            Ok(mailer) => {
                tracing::info!(host = %config.smtp_host, port = config.smtp_port, "Using SMTP mailer");
                Arc::new(mailer)
            }
            Err(e) => {
                tracing::error!("Failed to initialize SMTP mailer: {}", e);
                tracing::warn!("Falling back to mock mailer");
                Arc::new(MockMailer::new())
            }
        },
    }
}
