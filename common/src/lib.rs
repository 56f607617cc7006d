//! Shared data model for `huntdeck`.
//!
//! Everything in here is runtime agnostic: no timers, no tasks. The session
//! state machines in `huntdeck-core` and the pages in `huntdeck-cli` both
//! build on these types.

pub mod config;
pub mod error;
pub mod macros;
pub mod session;

#[doc(hidden)]
pub use tracing;
