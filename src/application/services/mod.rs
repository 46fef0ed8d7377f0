//! Application services - Objects that coordinate pattern participants

pub mod currency_exchange;
pub mod invoker;
pub mod payment_context;

pub use currency_exchange::CurrencyExchange;
pub use invoker::{Invoker, UndoOutcome};
pub use payment_context::{PaymentContext, PaymentMenu, PaymentOutcome};
