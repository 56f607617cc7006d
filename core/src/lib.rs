//! # Huntdeck Core
//!
//! The session state machines behind every page of the dashboard.
//!
//! * **[`operation`]**: the port a controller drives (`start` / `cancel`), and
//!   the timer-backed simulation used by the mock pages.
//! * **[`session`]**: what every session shares: view projection, change
//!   subscriptions, scheduling of exactly one resolution per start.
//! * **[`scanner`]**: the scan session controller (recon, vulnerabilities).
//! * **[`connection`]**: the LLM connection session controller (settings).
//!
//! A controller is owned by exactly one view. Dropping it is teardown: the
//! pending operation is aborted and no resolution is applied afterwards.

pub mod connection;
pub mod operation;
pub mod scanner;
pub mod session;
