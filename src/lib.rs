//! Songify relay - serves the live song-request queue of a Songify account
//! as normalized JSON, next to a static front-end.
//!
//! The upstream API returns the queue in more than one shape; the
//! [`controllers::normalizer`] turns any of them into [`models::SongRecord`]s.

/// Startup configuration
pub mod config;
/// Request handling logic
pub mod controllers;
/// Upstream error type
pub mod errors;
/// Wire types
pub mod models;
/// HTTP routes
pub mod routers;
/// Router state
pub mod state;

pub use config::AppConfig;
pub use routers::app;
pub use state::AppState;
