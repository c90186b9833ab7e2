//! Core - shared building blocks
//!
//! - error    - crate error type
//! - logging  - `console_log` setup for the `log` facade
//! - math     - 2D vectors and bounds

pub mod error;
pub mod logging;
pub mod math;

pub use error::{Result, SandboxError};
