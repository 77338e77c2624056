use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::state::ServerState;
use crate::error::ApiError;
use crate::state::{validate, FieldConfig, FormElements, FormKind};
use crate::tasks::Task;

fn form_kind(slug: &str) -> Result<FormKind, ApiError> {
    FormKind::from_slug(slug).ok_or(ApiError::NotFound)
}

/// Everything a client needs to render a form
#[derive(Serialize)]
pub struct FormDescriptor {
    #[serde(flatten)]
    config: FieldConfig,
    elements: FormElements,
}

/// Field config for a form, what a page load would hand the client
pub async fn form_config_handler(
    Path(slug): Path<String>,
) -> Result<Json<FormDescriptor>, ApiError> {
    let kind = form_kind(&slug)?;
    Ok(Json(FormDescriptor {
        config: kind.config()?,
        elements: FormElements::for_kind(kind),
    }))
}

/// Validate a form-encoded submission and echo the value back
pub async fn form_action_handler(
    Path(slug): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let config = form_kind(&slug)?.config()?;

    let value = fields
        .get(&config.name)
        .ok_or_else(|| ApiError::MalformedPayload(format!("missing field `{}`", config.name)))?;

    let validation = validate(value, &config);
    if !validation.is_valid() {
        info!(form = %slug, violations = ?validation.violations, "Rejected submission");
        return Err(ApiError::Invalid(validation.violations.into_iter().collect()));
    }

    info!(form = %slug, "Accepted submission");
    Ok(value.clone())
}

pub async fn open_ai_handler(State(state): State<Arc<ServerState>>) -> Result<String, ApiError> {
    state.completions.describe_image().await.map_err(|e| {
        error!("Completions proxy failed: {e:#}");
        ApiError::Upstream(e.to_string())
    })
}

pub async fn shell_handler(State(state): State<Arc<ServerState>>) -> Result<String, ApiError> {
    state.shell.run().await.map_err(|e| {
        error!("Shell proxy failed: {e:#}");
        ApiError::Upstream(e.to_string())
    })
}

#[derive(Deserialize)]
pub struct NewTask {
    text: String,
    #[serde(default)]
    is_completed: bool,
}

#[derive(Deserialize)]
pub struct TaskUpdate {
    is_completed: bool,
}

pub async fn list_tasks_handler(State(state): State<Arc<ServerState>>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

pub async fn create_task_handler(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<NewTask>,
) -> impl IntoResponse {
    let task = state.tasks.insert(&payload.text, payload.is_completed).await;
    (StatusCode::CREATED, Json(task))
}

pub async fn get_task_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Task>, ApiError> {
    state.tasks.get(id).await.map(Json).ok_or(ApiError::NotFound)
}

pub async fn update_task_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    state
        .tasks
        .set_completed(id, payload.is_completed)
        .await
        .map(Json)
        .ok_or_else(|| {
            warn!(%id, "Update for unknown task");
            ApiError::NotFound
        })
}

pub async fn delete_task_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .tasks
        .remove(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::NotFound)
}
