//! icon-cli library root.
//!
//! Exposes the argument parser, the command layer, and the config store so
//! integration tests can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
