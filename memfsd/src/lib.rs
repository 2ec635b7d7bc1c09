//! # MemFS Host Daemon
//!
//! Host binary for the in-memory filesystem. Serves the namespace over a
//! small HTTP API, or runs an interactive shell on stdin. A seed script of
//! shell commands can be applied before either mode starts.

pub mod http;
pub mod runtime;

pub use runtime::{HostMode, HostRuntime, HostRuntimeConfig, HostRuntimeError};
