//! Shared domain types for Herald.
//!
//! This crate contains the types used across the Herald bot: snowflake ID
//! newtypes, the persisted session record, configuration structs, and the
//! error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod id;
pub mod session;
