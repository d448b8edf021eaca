//! HTTP presentation layer

pub mod controllers;
pub mod extractors;
pub mod format;
pub mod models;
pub mod routes;


pub use controllers::AppState;
pub use routes::create_router;
