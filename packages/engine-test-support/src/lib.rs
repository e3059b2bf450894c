//! Engine test support utilities
//!
//! Shared helpers for the engine's integration tests: unified logging
//! initialization so every test binary gets the same subscriber setup.

pub mod logging;
