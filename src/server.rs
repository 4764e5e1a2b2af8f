//! HTTP surface: direct todo CRUD plus the `/chat` endpoint.

use crate::error::TodoError;
use crate::interpreter::Interpreter;
use crate::models::{ChatReply, NewTodo, Todo};
use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
struct AppState {
    interpreter: Interpreter,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
    code: &'static str,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Build the router with all routes
pub fn router(interpreter: Interpreter) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/todos", post(create_todo).get(list_todos))
        .route("/todos/{id}", delete(delete_todo))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { interpreter })
}

/// Bind `listen` and serve until ctrl-c
pub async fn serve(listen: SocketAddr, interpreter: Interpreter) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("bind {listen} failed"))?;
    info!(addr = %listen, "todochat listening");

    axum::serve(listener, router(interpreter))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "ctrl-c handler unavailable; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Todo API with Chatbot is running!",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<NewTodo>,
) -> Result<Json<Todo>, ApiError> {
    if payload.title.trim().is_empty() {
        return Err(map_error(TodoError::EmptyTitle));
    }
    let todo = state
        .interpreter
        .store()
        .create(&payload.title)
        .map_err(map_error)?;
    Ok(Json(todo))
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.interpreter.store().list().map_err(map_error)?;
    Ok(Json(todos))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = state.interpreter.store().delete(id).map_err(map_error)?;
    if !removed {
        warn!(id, "delete requested for missing todo");
        return Err(map_error(TodoError::TodoNotFound(id)));
    }
    Ok(Json(serde_json::json!({
        "message": format!("Todo {id} deleted successfully"),
    })))
}

async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let reply = state
        .interpreter
        .interpret(&payload.message)
        .map_err(map_error)?;
    Ok(Json(reply))
}

fn map_error(err: TodoError) -> ApiError {
    let (status, detail) = match &err {
        TodoError::TodoNotFound(_) => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
        TodoError::EmptyTitle => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        _ => {
            error!(error = %err, "todo store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    };
    (
        status,
        Json(ErrorBody {
            detail,
            code: err.error_code(),
        }),
    )
}
