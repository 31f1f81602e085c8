use crate::api_doc::openapi_handler;
use crate::config::Config;
use crate::controller::SharedController;
use crate::handlers::health_handler;
use crate::router::todo_router;
use crate::routes;
use axum::{routing::get, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Assemble the service: health, API docs and the todo router at its configured base path
pub fn app(config: &Config, controller: SharedController) -> Router {
    let todos = todo_router(controller);

    let router = Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::OPENAPI_JSON, get(openapi_handler));

    // axum refuses to nest at the root
    let router = if config.todos_base_path == "/" {
        router.merge(todos)
    } else {
        router.nest(&config.todos_base_path, todos)
    };

    router.layer(TraceLayer::new_for_http())
}

/// Strip trailing slashes before routing so `/todos/` and `/todos` are the same route.
///
/// Must wrap the whole router: layers added with `Router::layer` only run
/// after a route has already matched.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
