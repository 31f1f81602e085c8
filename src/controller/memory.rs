use crate::controller::TodoController;
use crate::error::ApiError;
use crate::models::{NewTodo, TodoResponse, TodoUpdate};
use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored todo with its timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRecord {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&TodoRecord> for TodoResponse {
    fn from(record: &TodoRecord) -> Self {
        TodoResponse {
            id: record.id.to_string(),
            title: record.title.clone(),
            completed: record.completed,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Todo controller keeping everything in process memory.
///
/// Records are kept in creation order, so listing needs no sort.
#[derive(Default)]
pub struct MemoryTodoController {
    todos: RwLock<Vec<TodoRecord>>,
}

impl MemoryTodoController {
    pub fn new() -> Self {
        Self::default()
    }

    async fn list(&self) -> Vec<TodoResponse> {
        self.todos.read().await.iter().map(TodoResponse::from).collect()
    }

    async fn get(&self, id_str: &str) -> Result<TodoResponse, ApiError> {
        let id = parse_id(id_str)?;

        self.todos
            .read()
            .await
            .iter()
            .find(|todo| todo.id == id)
            .map(TodoResponse::from)
            .ok_or(ApiError::TodoNotFound(id))
    }

    async fn create(&self, body: &[u8]) -> Result<TodoResponse, ApiError> {
        let new_todo: NewTodo = serde_json::from_slice(body)?;
        let title = validate_title(&new_todo.title)?;

        let now = Utc::now();
        let record = TodoRecord {
            id: Uuid::new_v4(),
            title,
            completed: new_todo.completed,
            created_at: now,
            updated_at: now,
        };
        let response = TodoResponse::from(&record);

        self.todos.write().await.push(record);
        Ok(response)
    }

    async fn update(&self, id_str: &str, body: &[u8]) -> Result<TodoResponse, ApiError> {
        let id = parse_id(id_str)?;
        let update: TodoUpdate = serde_json::from_slice(body)?;
        let title = update.title.as_deref().map(validate_title).transpose()?;

        let mut todos = self.todos.write().await;
        let record = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(ApiError::TodoNotFound(id))?;

        if let Some(title) = title {
            record.title = title;
        }
        if let Some(completed) = update.completed {
            record.completed = completed;
        }
        record.updated_at = Utc::now();

        Ok(TodoResponse::from(&*record))
    }

    async fn delete(&self, id_str: &str) -> Result<Uuid, ApiError> {
        let id = parse_id(id_str)?;

        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(ApiError::TodoNotFound(id))?;
        todos.remove(index);

        Ok(id)
    }
}

#[async_trait::async_trait]
impl TodoController for MemoryTodoController {
    async fn list_todos(&self) -> Response {
        let todos = self.list().await;
        tracing::info!("Listed {} todos", todos.len());
        (StatusCode::OK, Json(todos)).into_response()
    }

    async fn get_todo(&self, id: String) -> Response {
        let result = self.get(&id).await;
        if result.is_ok() {
            tracing::info!("Successfully retrieved todo with id: {}", id);
        }
        respond(StatusCode::OK, result)
    }

    async fn create_todo(&self, body: Bytes) -> Response {
        let result = self.create(&body).await;
        if let Ok(todo) = &result {
            tracing::info!("Successfully created todo with id: {}", todo.id);
        }
        respond(StatusCode::CREATED, result)
    }

    async fn update_todo(&self, id: String, body: Bytes) -> Response {
        let result = self.update(&id, &body).await;
        if result.is_ok() {
            tracing::info!("Successfully updated todo with id: {}", id);
        }
        respond(StatusCode::OK, result)
    }

    async fn delete_todo(&self, id: String) -> Response {
        match self.delete(&id).await {
            Ok(id) => {
                tracing::info!("Successfully deleted todo with id: {}", id);
                StatusCode::NO_CONTENT.into_response()
            }
            Err(err) => {
                tracing::info!("Delete rejected for id {}: {:?}", id, err);
                err.into_response()
            }
        }
    }
}

fn respond<T: Serialize>(status: StatusCode, result: Result<T, ApiError>) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(err) => {
            tracing::info!("Request rejected: {:?}", err);
            err.into_response()
        }
    }
}

fn parse_id(id_str: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id_str).map_err(|_| ApiError::InvalidUuid(id_str.to_string()))
}

fn validate_title(title: &str) -> Result<String, ApiError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::InvalidField("title must not be blank".to_string()));
    }
    Ok(title.to_string())
}
