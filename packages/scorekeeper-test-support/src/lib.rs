//! Scorekeeper test support utilities
//!
//! Shared helpers for integration tests, currently the unified logging
//! initialization.

pub mod logging;
