//! HTTP surface: the Discord interactions endpoint and health check.

pub mod interactions;
pub mod router;
pub mod verify;
