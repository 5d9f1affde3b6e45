//! Command-line interface implementation for the `tangle` binary.

pub mod commands;
