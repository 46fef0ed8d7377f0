//! Domain layer - Pattern participants with no I/O of their own
//!
//! This layer contains:
//! - Entities: Devices, commands, recipes, chat users, strategies, observers, beverages
//! - Traits: The roles those entities play (Command, Recipe, Mediator, ...)

pub mod entities;
pub mod traits;
