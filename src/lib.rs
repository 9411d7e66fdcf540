//! Library surface for the employee tracker CLI.
//!
//! The binary in `main.rs` only wires these pieces together: configuration
//! and the connection pool come up first, then the application loop drives
//! the cascading menus until the operator exits.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod ui;

/// Startup pieces `main.rs` needs by name.
pub use config::DbConfig;
pub use db::{connect, DbAccess, Entity};
pub use error::DbError;

/// The session entry point and the loop's state enum.
pub use app::{run_session, LoopState};
