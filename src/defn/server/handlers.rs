use super::error::ApiError;
use crate::commands::{self, CmdResult, ListedEntry};
use crate::dictionary::Dictionary;
use axum::extract::Path;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

pub type SharedDictionary = Arc<Dictionary>;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn from_result(result: &CmdResult) -> Self {
        Self {
            message: result.summary().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DefinitionResponse {
    #[serde(flatten)]
    pub entry: ListedEntry,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub entries: Vec<ListedEntry>,
}

/// Dictionary calls block on file IO and on the worker's reply, so they run
/// on the blocking pool.
async fn blocking<T, F>(dict: SharedDictionary, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&Dictionary) -> crate::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&dict))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(ApiError::from)
}

/// POST /add/:word/:definition
pub async fn add_word(
    Extension(dict): Extension<SharedDictionary>,
    Path((word, definition)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = blocking(dict, move |d| commands::add::run(d, &word, &definition)).await?;
    Ok(Json(MessageResponse::from_result(&result)))
}

/// GET /get/:word
pub async fn get_word(
    Extension(dict): Extension<SharedDictionary>,
    Path(word): Path<String>,
) -> Result<Json<DefinitionResponse>, ApiError> {
    let result = blocking(dict, move |d| commands::define::run(d, &word)).await?;
    let message = result.summary().unwrap_or_default().to_string();
    let entry = result
        .listed
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Internal("definition missing from result".to_string()))?;
    Ok(Json(DefinitionResponse { entry, message }))
}

/// DELETE /remove/:word
pub async fn remove_word(
    Extension(dict): Extension<SharedDictionary>,
    Path(word): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = blocking(dict, move |d| commands::remove::run(d, &word)).await?;
    Ok(Json(MessageResponse::from_result(&result)))
}

/// GET /list
pub async fn list_words(
    Extension(dict): Extension<SharedDictionary>,
) -> Result<Json<ListResponse>, ApiError> {
    let result = blocking(dict, |d| commands::list::run(d)).await?;
    Ok(Json(ListResponse {
        entries: result.listed,
    }))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
