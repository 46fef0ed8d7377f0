//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Terminal I/O and payment provider integrations

pub mod adapters;
pub mod config;
