//! Session lifecycle logic and platform ports for Herald.
//!
//! This crate defines the "ports" (the [`chat::ChatClient`] and
//! [`storage::RecordStore`] traits) that herald-infra implements, plus the
//! logic wired between them: the session tracker, the lifecycle controller,
//! and the presence rotator. It depends only on `herald-types` -- never on
//! `herald-infra` or any network/IO crate.

pub mod chat;
pub mod presence;
pub mod session;
pub mod storage;

#[cfg(test)]
mod test_support;
