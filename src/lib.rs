//! `star-tools` library crate.
//!
//! The binary (`stars`) is a thin wrapper around this library so that:
//!
//! - each operation is testable without spawning processes
//! - the validator, statistics scan and generator stay independent of each other

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
