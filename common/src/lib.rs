//! Shared primitives for SomaBuddy.
//!
//! Everything here is used by more than one crate in the workspace:
//!
//! - **common** (this crate): error locations, HTTP status helpers
//! - **models**: plain data passed between layers
//! - **reading-core**: text processing, catalog, uploads and the HTTP API
//! - **somabuddy**: the server binary wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
