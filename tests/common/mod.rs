//! Common test utilities for static-deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with temp project/home dirs and fake
//!   `rsync`/`ssh` programs on `PATH`
//! - Assertion macros: `assert_output_contains!`, `assert_output_not_contains!`
//! - Fixtures: Reusable config snippets

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
