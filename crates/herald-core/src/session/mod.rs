//! Session state tracking and lifecycle orchestration.

pub mod announce;
pub mod lifecycle;
pub mod tracker;

pub use lifecycle::{GuildBinding, SessionLifecycle};
pub use tracker::SessionTracker;
