use crate::controller::SharedController;
use crate::handlers::todos;
use crate::routes;
use axum::{
    http::Method,
    routing::{delete, get, post, put, MethodRouter},
    Router,
};

/// One row of the todo route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoAction {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl TodoAction {
    /// The full table in declaration order
    pub const ALL: [TodoAction; 5] = [
        TodoAction::List,
        TodoAction::Get,
        TodoAction::Create,
        TodoAction::Update,
        TodoAction::Delete,
    ];

    pub fn method(self) -> Method {
        match self {
            TodoAction::List | TodoAction::Get => Method::GET,
            TodoAction::Create => Method::POST,
            TodoAction::Update => Method::PUT,
            TodoAction::Delete => Method::DELETE,
        }
    }

    /// Path pattern relative to the mount point
    pub fn path(self) -> &'static str {
        match self {
            TodoAction::List | TodoAction::Create => routes::TODO_LIST,
            TodoAction::Get | TodoAction::Update | TodoAction::Delete => routes::TODO_ITEM,
        }
    }

    pub fn handler_name(self) -> &'static str {
        match self {
            TodoAction::List => "list_todos",
            TodoAction::Get => "get_todo",
            TodoAction::Create => "create_todo",
            TodoAction::Update => "update_todo",
            TodoAction::Delete => "delete_todo",
        }
    }

    fn method_router(self) -> MethodRouter<SharedController> {
        match self {
            TodoAction::List => get(todos::list_todos),
            TodoAction::Get => get(todos::get_todo),
            TodoAction::Create => post(todos::create_todo),
            TodoAction::Update => put(todos::update_todo),
            TodoAction::Delete => delete(todos::delete_todo),
        }
    }
}

/// Build the mountable todo router around `controller`.
///
/// Every call returns a fresh router; the caller decides where to mount it.
pub fn todo_router(controller: SharedController) -> Router {
    route_actions(TodoAction::ALL, controller)
}

/// Fold `actions` into a router in the given order.
///
/// Routes sharing a path are merged by axum into one method router, so any
/// order of the same actions routes identically.
pub fn route_actions(
    actions: impl IntoIterator<Item = TodoAction>,
    controller: SharedController,
) -> Router {
    actions
        .into_iter()
        .fold(Router::new(), |router, action| {
            router.route(action.path(), action.method_router())
        })
        .with_state(controller)
}

/// Full path of a table entry once mounted at `base_path`
pub fn mounted_path(base_path: &str, path: &str) -> String {
    match (base_path, path) {
        ("/", path) => path.to_string(),
        (base, "/") => base.to_string(),
        (base, path) => format!("{}{}", base, path),
    }
}

pub fn log_route_table(base_path: &str) {
    tracing::info!("Todo routes:");
    for action in TodoAction::ALL {
        tracing::info!(
            "  {:<6} {} -> {}",
            action.method().as_str(),
            mounted_path(base_path, action.path()),
            action.handler_name()
        );
    }
}
