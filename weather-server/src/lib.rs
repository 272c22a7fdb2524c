//! HTTP surface of the weather proxy.
//!
//! Exposes `GET /weather`, which geocodes a city and forwards the provider's
//! payload verbatim, plus a health probe and optional static assets.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
