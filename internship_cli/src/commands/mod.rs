//! CLI subcommand implementations.

pub mod applications;
pub mod plan;
pub mod review;
