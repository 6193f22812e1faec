//! Command-line interface module
//!
//! Handles top-level argument parsing; command arguments are parsed by the
//! command registry

pub mod args;

pub use args::*;
