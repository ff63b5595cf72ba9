#![forbid(unsafe_code)]

//! Runtime invariant checks.
//!
//! Each check returns normally when its condition holds. On violation it notifies every
//! registered failure handler, in registration order, then panics with the payload
//! `"<message>: <details>"`. Violations are bugs, not recoverable errors.
//!
//! ```
//! must::register_failure_handler(|message, details| {
//!     log::error!("invariant broken: {message} ({details})");
//! });
//!
//! let queue = vec![1, 2, 3];
//! must::not_empty(&queue, "work queue must be primed");
//! must::greater_than(queue.len(), 2, "queue holds at least three jobs");
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod failure;

pub use checks::*;
pub use config::{config, init, FatalMode, MustConfig};
pub use error::{ConfigError, ConfigResult};
pub use failure::{
    abort, catch_violation, register_failure_handler, FailureHandler, FailureRegistry, Violation,
};
