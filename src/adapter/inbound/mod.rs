//! Inbound adapters: the command-line entry points.

pub mod cli;
