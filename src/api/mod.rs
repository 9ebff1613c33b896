//! HTTP handler and request processing

pub mod decoder;
pub mod handler;
pub mod parsing;

// Re-export the router for convenience
pub use handler::{AppState, router};
