//! Domain entities - The toy objects each demo wires together

pub mod beverage;
pub mod command;
pub mod currency;
pub mod device;
pub mod payment;
pub mod recipe;
pub mod user;

pub use beverage::{BaseBeverage, Condiment, Espresso, Latte, Milk, Mocha, Order, Sugar, Tea, WhippedCream};
pub use command::{DoorOpenCommand, LightOnCommand, ThermostatIncreaseCommand};
pub use currency::{BankDisplay, MobileApp, NewsAgency};
pub use device::{Door, Light, Thermostat, DEFAULT_TEMPERATURE};
pub use payment::{CreditCardPayment, CryptoPayment, PayPalPayment};
pub use recipe::{Coffee, HotChocolate, Tea as TeaRecipe};
pub use user::ChatUser;
