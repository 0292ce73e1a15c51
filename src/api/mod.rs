use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::db::RepositoryError;
use crate::error::AppError;
use crate::models::{NewTodo, Todo};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/todo", get(list_todos).post(create_todo))
        .route("/todo/{id}", get(get_todo).put(update_todo).delete(delete_todo));

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => {
                AppError::not_found("Item not found", format!("todo {} not found", id))
            }
            RepositoryError::Validation(msg) => AppError::bad_request("Invalid item", msg),
            RepositoryError::Persistence(e) => AppError::Database(e),
        }
    }
}

/// Ids are positive integers; anything else is rejected before touching the store.
/// A segment the extractor cannot decode counts as unparsable too.
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, String> {
    let Path(raw) = path.map_err(|e| e.body_text())?;
    parse_id(&raw)
}

fn parse_id(raw: &str) -> Result<i64, String> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(id) => Err(format!("id must be a positive integer, got {}", id)),
        Err(e) => Err(format!("invalid id {:?}: {}", raw, e)),
    }
}

async fn index() -> &'static str {
    "App running"
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.todos.ping().await?;
    Ok(StatusCode::OK)
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todos.list().await?;
    Ok(Json(todos))
}

async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Todo>, AppError> {
    let id = path_id(path).map_err(|e| AppError::not_found("Item not found", e))?;
    let todo = state.todos.get(id).await?;
    Ok(Json(todo))
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    // malformed bodies answer 500 on create, 400 on update
    let Json(req) =
        payload.map_err(|e| AppError::internal("Review your input", e.body_text()))?;

    let todo = state
        .todos
        .create(req)
        .await
        .map_err(|e| AppError::bad_request("Failed creating item", e))?;

    info!("created todo {}", todo.id);
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let id = path_id(path).map_err(|e| AppError::bad_request("Item not found", e))?;

    state.todos.get(id).await?;

    let Json(req) =
        payload.map_err(|e| AppError::bad_request("Review your input", e.body_text()))?;

    let todo = state.todos.update(id, req).await.map_err(|e| match e {
        RepositoryError::NotFound(_) => AppError::from(e),
        other => AppError::bad_request("Error updating todo", other),
    })?;

    debug!("updated todo {}", todo.id);
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = path_id(path).map_err(|e| AppError::bad_request("Failed deleting todo", e))?;

    let affected = state.todos.delete(id).await?;
    if affected > 0 {
        info!("deleted todo {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::BAD_REQUEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Ok(1));
        assert_eq!(parse_id("9001"), Ok(9001));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }
}
