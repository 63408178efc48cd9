//! # Registrar Library
//!
//! This library exposes the Registrar modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export registrar_core for convenience
pub use registrar_core;
