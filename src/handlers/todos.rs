//! Entry points of the todo route table.
//!
//! Each handler extracts what axum hands it and delegates straight to the
//! controller. Nothing here parses bodies, validates ids or maps errors: the
//! controller's response is returned unmodified.

use crate::controller::SharedController;
use crate::error::ErrorResponse;
use crate::models::{NewTodo, TodoResponse, TodoUpdate};
use crate::routes;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Response,
};

/// GET / handler - List all todos
#[utoipa::path(
    get,
    path = routes::TODO_LIST,
    responses(
        (status = 200, description = "All todos in creation order", body = Vec<TodoResponse>)
    ),
    tag = "todos"
)]
pub async fn list_todos(State(controller): State<SharedController>) -> Response {
    controller.list_todos().await
}

/// GET /{id} handler - Fetch one todo
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo identifier")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn get_todo(
    State(controller): State<SharedController>,
    Path(id): Path<String>,
) -> Response {
    controller.get_todo(id).await
}

/// POST / handler - Create a todo
#[utoipa::path(
    post,
    path = routes::TODO_LIST,
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Invalid JSON or blank title", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn create_todo(State(controller): State<SharedController>, body: Bytes) -> Response {
    controller.create_todo(body).await
}

/// PUT /{id} handler - Update a todo
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo identifier")
    ),
    request_body = TodoUpdate,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Invalid UUID format, invalid JSON or blank title", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn update_todo(
    State(controller): State<SharedController>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    controller.update_todo(id, body).await
}

/// DELETE /{id} handler - Remove a todo
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Todo identifier")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_todo(
    State(controller): State<SharedController>,
    Path(id): Path<String>,
) -> Response {
    controller.delete_todo(id).await
}
