//! Adapters - The terminal and third-party payment providers

pub mod console;
pub mod payment;

pub use console::{ConsoleAdapter, ScriptedConsole};
pub use payment::Provider;
