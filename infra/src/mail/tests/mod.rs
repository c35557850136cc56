//! Mailer tests

use hr_core::services::mail::{Mailer, OutgoingMail};
use hr_shared::config::MailProvider;
use hr_shared::MailConfig;

use super::{create_mailer, MockMailer, SmtpMailer};

fn mail(to: &str) -> OutgoingMail {
    OutgoingMail {
        to: to.to_string(),
        subject: "Your HRMS Password has been Reset".to_string(),
        body: "Hello".to_string(),
    }
}

fn smtp_config() -> MailConfig {
    MailConfig {
        provider: MailProvider::Smtp,
        username: "hr@corp.example".to_string(),
        password: "app-password".to_string(),
        from_address: "hr@corp.example".to_string(),
        ..MailConfig::default()
    }
}

#[tokio::test]
async fn test_mock_records_messages() {
    let mailer = MockMailer::new();
    let handle = mailer.clone();

    let id = mailer.send(&mail("a@corp.example")).await.unwrap();
    mailer.send(&mail("b@corp.example")).await.unwrap();

    assert!(id.starts_with("mock_"));
    assert_eq!(handle.get_message_count(), 2);
    assert_eq!(handle.sent_messages().len(), 2);
    assert_eq!(handle.last_message_to("a@corp.example").unwrap().body, "Hello");
    assert!(handle.last_message_to("c@corp.example").is_none());
}

#[tokio::test]
async fn test_mock_failure() {
    let mailer = MockMailer::failing();
    assert!(mailer.send(&mail("a@corp.example")).await.is_err());
    assert_eq!(mailer.get_message_count(), 0);
}

#[tokio::test]
async fn test_smtp_requires_credentials() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        ..MailConfig::default()
    };
    assert!(SmtpMailer::new(&config).is_err());
}

#[tokio::test]
async fn test_smtp_builds_with_credentials() {
    let mailer = SmtpMailer::new(&smtp_config()).unwrap();
    assert!(mailer.build_message(&mail("a@corp.example")).is_ok());
    assert!(mailer.build_message(&mail("not an address")).is_err());
}

#[tokio::test]
async fn test_factory_falls_back_to_mock() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        ..MailConfig::default()
    };
    let mailer = create_mailer(&config);
    // the mock accepts anything without a network round trip
    assert!(mailer.send(&mail("a@corp.example")).await.unwrap().starts_with("mock_"));
}
