//! Per-request log: method, path and duration.
//!
//! Every request produces a `tracing` event, and the same information is
//! appended to the log file as `[YYYY-MM-DD HH:MM:SS] METHOD PATH DURATION`.

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct RequestLog {
    file: Arc<PathBuf>,
}

impl RequestLog {
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Arc::new(path.into()),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

pub fn format_line(at: DateTime<Local>, method: &Method, path: &str, elapsed: Duration) -> String {
    format!(
        "[{}] {} {} {:?}",
        at.format("%Y-%m-%d %H:%M:%S"),
        method,
        path,
        elapsed
    )
}

pub async fn log_requests(
    Extension(log): Extension<RequestLog>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "request"
    );

    let line = format_line(Local::now(), &method, &path, elapsed);
    if let Err(e) = append(log.file(), &line).await {
        tracing::warn!(error = %e, file = %log.file().display(), "could not write request log");
    }

    response
}

async fn append(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}\n", line).as_bytes()).await
}
