//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, process wiring and the single-instance guard.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`pidfile`] - PID-file single-instance guard

pub mod bootstrap;
pub mod config;
pub mod pidfile;
