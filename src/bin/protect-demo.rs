//! Demo login service protected by the Account Protect API.
//!
//! ```text
//! protect-demo [config.toml]
//! ```
//!
//! Without a config file the key is read from `FRAUD_API_KEY`. The listen
//! address comes from `DEMO_BIND` (default `127.0.0.1:3000`).

use std::net::SocketAddr;
use std::path::Path;

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;

use fraud_sdk::config::loader::API_KEY_ENV;
use fraud_sdk::config::{load_config_with_env, ClientConfig};
use fraud_sdk::models::User;
use fraud_sdk::observability::logging::init_logging;
use fraud_sdk::{Client, LoginEvent, LoginStatus, ResponseAction};

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const MAX_BODY_BYTES: usize = 64 * 1024;
const DEMO_PASSWORD: &str = "correct horse battery staple";

#[derive(Debug, Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(State(client): State<Client>, request: Request) -> impl IntoResponse {
    let (parts, body) = request.into_parts();
    let form: LoginForm = match to_bytes(body, MAX_BODY_BYTES)
        .await
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
    {
        Some(form) => form,
        None => return (StatusCode::BAD_REQUEST, "malformed login form"),
    };
    let user = User::new(form.username.clone());

    if form.password != DEMO_PASSWORD {
        let event = LoginEvent::new(form.username, LoginStatus::Failed).with_user(user);
        match client.collect(&parts, &event).await {
            Ok(Some(details)) => {
                tracing::warn!(detail = ?details.message, errors = details.errors.len(), "Collect rejected")
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Collect failed"),
        }
        return (StatusCode::UNAUTHORIZED, "invalid credentials");
    }

    let event = LoginEvent::new(form.username, LoginStatus::Succeeded).with_user(user);
    match client.validate(&parts, &event).await {
        Ok(outcome) => {
            if let Some(e) = &outcome.error {
                tracing::warn!(error = %e, status = %outcome.response.status, "Validate failed open");
            }
            match outcome.response.action {
                ResponseAction::Deny => (StatusCode::FORBIDDEN, "login denied"),
                _ => (StatusCode::OK, "welcome"),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Validate could not be sent");
            (StatusCode::OK, "welcome")
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("fraud_sdk=debug,protect_demo=debug")?;

    let config = match std::env::args().nth(1) {
        Some(path) => load_config_with_env(Path::new(&path))?,
        None => ClientConfig::new(std::env::var(API_KEY_ENV).unwrap_or_default()),
    };
    let client = Client::new(config)?;

    let bind = std::env::var("DEMO_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = TcpListener::bind(&bind).await?;
    tracing::info!(address = %listener.local_addr()?, endpoint = %client.endpoint(), "Listening for connections");

    let app = Router::new().route("/login", post(login)).with_state(client);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
