//! # Session Inputs
//!
//! The values a page hands to its controller:
//! * [`target::Target`]: what a scan runs against.
//! * [`kind::ScanKind`]: which scan variant was requested, one enum per page.
//! * [`endpoint::LlmEndpoint`]: the LLM configuration a connection test binds.

pub mod endpoint;
pub mod kind;
pub mod target;
