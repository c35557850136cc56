//! Mock mailer for development and testing
//!
//! Messages are kept in memory instead of being delivered. Only the
//! recipient and subject are logged, never the body.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use hr_core::services::mail::{Mailer, OutgoingMail};
use hr_shared::validation::mask_email;

/// Mock mailer for development and testing
///
/// Clones share the same outbox and counter.
#[derive(Clone, Default)]
pub struct MockMailer {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Every message accepted so far
    outbox: Arc<Mutex<Vec<OutgoingMail>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock mailer that rejects every message
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Copies of all messages sent so far, oldest first
    pub fn sent_messages(&self) -> Vec<OutgoingMail> {
        match self.outbox.lock() {
            Ok(outbox) => outbox.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent message sent to `address`
    pub fn last_message_to(&self, address: &str) -> Option<OutgoingMail> {
        self.sent_messages()
            .into_iter()
            .rev()
            .find(|mail| mail.to == address)
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<String, String> {
        if self.simulate_failure {
            warn!(to = %mask_email(&mail.to), "Mock mailer simulating failure");
            return Err("Simulated mail delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.outbox.lock() {
            Ok(mut outbox) => outbox.push(mail.clone()),
            Err(poisoned) => poisoned.into_inner().push(mail.clone()),
        }

        info!(
            target: "mail_service",
            provider = "mock",
            to = %mask_email(&mail.to),
            subject = %mail.subject,
            message_id = %message_id,
            count,
            "Mail accepted (mock)"
        );

        Ok(message_id)
    }
}
