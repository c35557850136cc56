//! Outbound mail capability used by the password reset flow.

use async_trait::async_trait;

use crate::domain::entities::Employee;

pub const PASSWORD_RESET_SUBJECT: &str = "Your HRMS Password has been Reset";

/// A plain-text message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Trait for mail transport integration
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a message, returning a transport message id
    async fn send(&self, mail: &OutgoingMail) -> Result<String, String>;
}

/// Mail carrying a freshly generated temporary password
pub fn password_reset_mail(employee: &Employee, temporary_password: &str) -> OutgoingMail {
    OutgoingMail {
        to: employee.email.clone(),
        subject: PASSWORD_RESET_SUBJECT.to_string(),
        body: format!(
            "Hello {},\n\n\
             Your password has been reset. Your new temporary password is: {}\n\n\
             Please log in with it and change it from your profile.\n\n\
             Regards,\nHR Team",
            employee.first_name, temporary_password
        ),
    }
}
