//! HTTP handlers and shared application state.

pub mod destinations;
pub mod http;

pub use http::AppState;
