pub mod memory;

pub use memory::MemoryTodoController;

use axum::body::Bytes;
use axum::response::Response;
use std::sync::Arc;

/// The five operations the todo router dispatches to.
///
/// Each operation produces a complete HTTP response. The router hands the
/// `id` path segment over as-is and the request body as raw bytes; parsing
/// and validation belong to the implementation.
#[async_trait::async_trait]
pub trait TodoController: Send + Sync {
    async fn list_todos(&self) -> Response;

    async fn get_todo(&self, id: String) -> Response;

    async fn create_todo(&self, body: Bytes) -> Response;

    async fn update_todo(&self, id: String, body: Bytes) -> Response;

    async fn delete_todo(&self, id: String) -> Response;
}

/// Controller handle stored as router state, resolved once when the router is built
pub type SharedController = Arc<dyn TodoController>;
