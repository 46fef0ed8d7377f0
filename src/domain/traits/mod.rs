//! Domain traits - The roles each pattern participant plays

pub mod beverage;
pub mod command;
pub mod console;
pub mod mediator;
pub mod observer;
pub mod payment;
pub mod recipe;

pub use beverage::Beverage;
pub use command::Command;
pub use console::Console;
pub use mediator::{Colleague, Mediator};
pub use observer::CurrencyObserver;
pub use payment::{PaymentProcessor, PaymentStrategy};
pub use recipe::{PrepareRecipe, Preparation, Recipe};
