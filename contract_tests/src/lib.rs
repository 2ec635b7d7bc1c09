//! # Wire Contract Tests
//!
//! Golden tests for the filesystem's external surfaces, to make sure they
//! don't drift accidentally over time.
//!
//! ## Structure
//!
//! Each surface has a module pinning the parts clients depend on:
//! - the node metadata JSON shape (`type` strings, field names, optionality)
//! - the `path` ancestry sequences
//! - the HTTP error envelope

pub mod http_envelope;
pub mod wire_format;
