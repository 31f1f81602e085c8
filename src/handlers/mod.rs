pub mod health;
pub mod todos;

pub use health::health_handler;
