//! Sport-agnostic building blocks for pricing heuristics: a Poisson goal-count distribution,
//! probability helpers, and the aggregation of independently-priced legs into a single slip.

pub mod error;
pub mod factorial;
pub mod file;
pub mod poisson;
pub mod probs;
pub mod slip;
pub mod timed;

pub use error::InvalidArgument;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
