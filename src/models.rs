use serde::{Deserialize, Serialize};

/// A todo as returned by the API
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoResponse {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for POST /todos
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request body for PUT /todos/{id}; absent fields keep their current value
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub completed: Option<bool>,
}
