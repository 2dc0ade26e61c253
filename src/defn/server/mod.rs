//! # HTTP API
//!
//! A thin axum adapter over the command layer. It owns no dictionary state:
//! every handler forwards to a command through the shared [`Dictionary`].
//!
//! | method | path                      | operation |
//! |--------|---------------------------|-----------|
//! | POST   | `/add/:word/:definition`  | add       |
//! | GET    | `/get/:word`              | define    |
//! | DELETE | `/remove/:word`           | remove    |
//! | GET    | `/list`                   | list      |
//! | GET    | `/health`                 | liveness, never authenticated |
//!
//! Every request goes through the request log. Dictionary routes also go
//! through [`auth::jwt_auth`] when a secret is configured.

use crate::config::DefnConfig;
use crate::dictionary::Dictionary;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use axum::{Extension, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request_log;

pub use auth::JwtConfig;
pub use handlers::SharedDictionary;
pub use request_log::RequestLog;

/// Build the full router. `jwt: None` leaves the dictionary routes open.
pub fn build_router(
    dictionary: SharedDictionary,
    jwt: Option<JwtConfig>,
    request_log: RequestLog,
) -> Router {
    let mut protected = Router::new()
        .route("/add/:word/:definition", post(handlers::add_word))
        .route("/get/:word", get(handlers::get_word))
        .route("/remove/:word", delete(handlers::remove_word))
        .route("/list", get(handlers::list_words));

    if let Some(jwt) = jwt {
        protected = protected
            .layer(axum_mw::from_fn(auth::jwt_auth))
            .layer(Extension(jwt));
    }

    let public = Router::new().route("/health", get(handlers::health));

    public
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(request_log))
                .layer(axum_mw::from_fn(request_log::log_requests)),
        )
        .layer(Extension(dictionary))
}

/// Serve until Ctrl-C, then close the dictionary.
pub async fn serve(dictionary: Dictionary, config: &DefnConfig) -> anyhow::Result<()> {
    let dictionary = Arc::new(dictionary);

    let jwt = config
        .jwt_secret
        .as_deref()
        .map(|secret| JwtConfig::from_secret(secret.as_bytes()));
    if jwt.is_none() {
        tracing::warn!("no jwt_secret configured, dictionary routes are unauthenticated");
    }

    let app = build_router(
        Arc::clone(&dictionary),
        jwt,
        RequestLog::to_file(&config.request_log),
    );

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        file = %config.dictionary_file.display(),
        "defn listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    tokio::task::spawn_blocking(move || dictionary.close()).await??;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
