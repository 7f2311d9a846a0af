//! CLI command implementations.

pub mod algorithms;
pub mod common;
pub mod generate;
pub mod sizing;
pub mod version;
