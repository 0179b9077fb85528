//! Route handlers: parse the wire form, call the service, render the
//! result. No business rules live here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use taskdeck_core::{TodoId, TodoStatus};
use taskdeck_service::TodoService;

use crate::error::ApiError;
use crate::wire::{
    parse_datetime, CreateTodoRequest, ReorderRequest, StatsResponse, TodoResponse,
    UpdateTodoRequest,
};

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "todos": state.service.get_todo_count(),
    }))
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoResponse>> {
    Json(TodoResponse::from_items(&state.service.get_all_todos()))
}

/// The token is a status display label or the literal `all`.
pub async fn todos_by_status(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = if token == "all" {
        state.service.get_all_todos()
    } else {
        let status: TodoStatus = token.parse().map_err(ApiError::BadRequest)?;
        state.service.get_todos_by_status(status)
    };
    Ok(Json(TodoResponse::from_items(&todos)))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let target_date = parse_datetime(&req.target_date).map_err(ApiError::BadRequest)?;
    let status = match req.status.as_deref() {
        Some(token) => token.parse().map_err(ApiError::BadRequest)?,
        None => TodoStatus::default(),
    };
    let todo = state.service.create_todo(&req.content, target_date, status)?;
    Ok((StatusCode::CREATED, Json(TodoResponse::from_item(&todo))))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state.service.get_todo_by_id(&TodoId::from_raw(id))?;
    Ok(Json(TodoResponse::from_item(&todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let target_date = req
        .target_date
        .as_deref()
        .map(parse_datetime)
        .transpose()
        .map_err(ApiError::BadRequest)?;
    let status: Option<TodoStatus> = req
        .status
        .as_deref()
        .map(|token| token.parse())
        .transpose()
        .map_err(ApiError::BadRequest)?;

    let todo = state.service.update_todo(
        &TodoId::from_raw(id),
        req.content.as_deref(),
        target_date,
        status,
    )?;
    Ok(Json(TodoResponse::from_item(&todo)))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.service.delete_todo(&TodoId::from_raw(id))?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}

pub async fn reorder_todos(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Json<serde_json::Value> {
    let order: Vec<TodoId> = req.order.into_iter().map(TodoId::from_raw).collect();
    state.service.reorder_todos(&order);
    Json(serde_json::json!({ "reordered": true }))
}

pub async fn sort_by_date(State(state): State<AppState>) -> Json<Vec<TodoResponse>> {
    Json(TodoResponse::from_items(&state.service.sort_by_date()))
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.service.get_statistics().into())
}
