//! Shared setup for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use hr_api::routes::AppState;
use hr_core::repositories::InMemoryStore;
use hr_core::services::CredentialServiceConfig;
use hr_infra::MockMailer;
use serde_json::{json, Value};

pub type MemoryState = AppState<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;

pub struct TestContext {
    pub state: web::Data<MemoryState>,
    pub store: Arc<InMemoryStore>,
    pub mailer: MockMailer,
}

pub fn test_context() -> TestContext {
    let store = Arc::new(InMemoryStore::new());
    let mailer = MockMailer::new();

    let config = CredentialServiceConfig {
        bcrypt_cost: 4,
        mail_timeout: Duration::from_secs(2),
        ..Default::default()
    };

    let state = AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(mailer.clone()),
        config,
    );

    TestContext {
        state: web::Data::new(state),
        store,
        mailer,
    }
}

/// Send a request and decode the JSON response body
pub async fn call_json<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub fn registration(first_name: &str, email: &str, password: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Kulkarni",
        "email": email,
        "password": password,
        "department": "Operations"
    })
}

pub fn register_request(first_name: &str, email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/register")
        .set_json(registration(first_name, email, password))
}

/// Send a registration and return the allocated id
pub async fn register<S, R, B>(app: &S, req: R) -> String
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = call_json(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
    body["id"].as_str().unwrap().to_string()
}
