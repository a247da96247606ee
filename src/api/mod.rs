//! API module for HTTP endpoints
//!
//! Exposes the schedule to the desktop frontend as a request/response API,
//! one call per operation.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
