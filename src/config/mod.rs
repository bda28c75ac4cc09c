//! # Configuration
//!
//! Process-level settings for the provider and its CLI.
//!
//! ## Module Structure
//!
//! - `app.rs` - `AppConfig` loaded from environment variables, log level and format

mod app;

pub use app::{AppConfig, LogFormat, LogLevel};
