//! Common test utilities for layergen CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: Reusable schema constants

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
