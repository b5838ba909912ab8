//! CLI subcommands

pub mod chart;
pub mod normalize;
pub mod pods;
