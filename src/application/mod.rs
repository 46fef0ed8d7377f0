//! Application layer - Coordinators and demo drivers
//!
//! This layer contains:
//! - Services: Invoker, payment context, currency exchange
//! - Messaging: The chat room mediator
//! - Demos: One driver per pattern demo
//! - Errors: Demo, input, menu and config errors

pub mod demos;
pub mod errors;
pub mod messaging;
pub mod services;
