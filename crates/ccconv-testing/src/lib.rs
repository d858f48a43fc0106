//! Testing infrastructure for ccconv integration tests.
//!
//! - `TestWorld`: isolated data dir and log root, plus a runner for the binary
//! - `fixtures`: builders for Claude Code log records
//! - `assertions`: checks over the JSON the CLI prints

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
