//! HTTP API module for the SMS front end.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
