//! Infrastructure adapters for Herald.
//!
//! Implements the herald-core ports against the real world: a JSON file
//! for the session record, and the Discord REST API for the chat platform.

pub mod config;
pub mod discord;
pub mod store;
