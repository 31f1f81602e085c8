use axum::Json;
use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{NewTodo, TodoResponse, TodoUpdate};
use crate::routes;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-routes API",
        version = "1.0.0",
        description = "A todo collection exposed as a mountable REST route table"
    ),
    paths(handlers::health::health_handler),
    nest(
        (path = routes::TODOS_BASE, api = TodoApi)
    ),
    components(
        schemas(ErrorResponse, HealthResponse)
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todos", description = "Todo collection operations")
    )
)]
pub struct ApiDoc;

/// Todo routes, relative to their mount point
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::todos::list_todos,
        handlers::todos::get_todo,
        handlers::todos::create_todo,
        handlers::todos::update_todo,
        handlers::todos::delete_todo
    ),
    components(
        schemas(TodoResponse, NewTodo, TodoUpdate, ErrorResponse)
    )
)]
pub struct TodoApi;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::mounted_path;

    #[test]
    fn test_todo_paths_are_nested() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|path| path.as_str() == routes::HEALTH));
        assert!(paths.iter().any(|path| path.as_str() == "/todos/{id}"));
        assert!(paths.iter().any(|path| path.starts_with("/todos") && !path.contains('{')));
    }

    #[test]
    fn test_documented_mount_matches_default() {
        let doc = ApiDoc::openapi();
        let item = mounted_path(routes::TODOS_BASE, routes::TODO_ITEM);

        assert!(doc.paths.paths.contains_key(&item), "{} not documented", item);
    }

    #[test]
    fn test_todo_schemas_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");

        for name in ["TodoResponse", "NewTodo", "TodoUpdate", "ErrorResponse"] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
