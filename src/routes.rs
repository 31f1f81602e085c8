// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Default mount point of the todo router
pub const TODOS_BASE: &str = "/todos";

// Paths below are relative to wherever the todo router is mounted
pub const TODO_LIST: &str = "/";
pub const TODO_ITEM: &str = "/{id}";
