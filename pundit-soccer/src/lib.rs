pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod estimate;
pub mod print;
pub mod slip;
pub mod table;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
