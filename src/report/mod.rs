//! Reporters for the collected coordinate set.
//!
//! - [`console`] — one coordinate per line on stdout.
//! - [`registry`] — JSON registration request against a DepBro registry.

pub mod console;
pub mod registry;
