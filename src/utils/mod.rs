//! Assorted utilities.

pub mod cli;
