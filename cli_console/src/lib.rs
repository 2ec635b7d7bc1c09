//! # CLI Console
//!
//! Line-oriented command interface over the namespace service. Each input
//! line is parsed into a verb plus arguments and dispatched against the
//! service; the caller owns the read/print loop.

pub mod commands;

pub use commands::CommandHandler;
