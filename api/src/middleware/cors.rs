//! CORS middleware configuration for the browser client.
//!
//! Development allows any origin. Production only allows the origins listed
//! in `ALLOWED_ORIGINS` (comma separated) plus `https://{WEB_DOMAIN}` when set.
//! `CORS_MAX_AGE` sets the preflight cache lifetime (default: 3600 seconds).

use actix_cors::Cors;
use actix_web::http::{header, Method};
use hr_shared::Environment;
use std::env;

const DEFAULT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_AGE);

    if environment.is_production() {
        create_production_cors(max_age, &allowed_origins())
    } else {
        create_development_cors(max_age)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS]
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::CACHE_CONTROL,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize, origins: &[String]) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age);

    if origins.is_empty() {
        tracing::warn!("No CORS origins configured; cross-origin requests will be refused");
    }

    for origin in origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// Origins from `ALLOWED_ORIGINS` and `WEB_DOMAIN`
fn allowed_origins() -> Vec<String> {
    let mut origins = parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default());

    if let Ok(web_domain) = env::var("WEB_DOMAIN") {
        let web_domain = web_domain.trim();
        if !web_domain.is_empty() {
            origins.push(format!("https://{}", web_domain));
            origins.push(format!("https://www.{}", web_domain));
        }
    }

    origins
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
