//! Discord REST adapter.
//!
//! `client` implements the herald-core [`ChatClient`] port over the
//! Discord HTTP API; `types` holds the outbound wire payloads and
//! `interaction` the inbound interaction payloads plus response builders.
//!
//! [`ChatClient`]: herald_core::chat::ChatClient

pub mod client;
pub mod interaction;
pub mod types;

pub use client::DiscordClient;
