//! # Observability
//!
//! Observability modules for logging.
//!
//! - `logging`: tracing subscriber setup (text or JSON on stderr)

pub mod logging;

// Re-export for convenience
pub use logging::*;
