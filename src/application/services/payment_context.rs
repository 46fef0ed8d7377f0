use crate::application::errors::MenuError;
use crate::domain::entities::{CreditCardPayment, CryptoPayment, PayPalPayment};
use crate::domain::traits::{Console, PaymentStrategy};
use crate::infrastructure::config::PaymentsConfig;

/// Result of a payment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The active strategy handled the payment; holds its status line
    Paid(String),
    /// No strategy was selected
    NoStrategy,
}

/// Checkout that delegates to whichever strategy is currently selected
pub struct PaymentContext<'a> {
    strategy: Option<Box<dyn PaymentStrategy>>,
    console: &'a dyn Console,
}

impl<'a> PaymentContext<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self {
            strategy: None,
            console,
        }
    }

    /// Replace the current strategy; the next payment uses it
    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        tracing::debug!("Payment strategy set to {}", strategy.name());
        self.strategy = Some(strategy);
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn execute_payment(&self, amount: f64) -> PaymentOutcome {
        let Some(strategy) = &self.strategy else {
            self.console.print_line("⚠️ Payment method is not selected!");
            return PaymentOutcome::NoStrategy;
        };

        let status = strategy.pay(amount);
        self.console.print_line(&status);
        PaymentOutcome::Paid(status)
    }
}

/// Numbered list of payment methods offered at checkout
pub struct PaymentMenu<'c> {
    config: &'c PaymentsConfig,
}

impl<'c> PaymentMenu<'c> {
    pub const OPTIONS: [&'static str; 3] = ["Credit card", "PayPal", "Crypto"];

    pub fn new(config: &'c PaymentsConfig) -> Self {
        Self { config }
    }

    pub fn print(&self, console: &dyn Console) {
        console.print_line("Choose a payment method:");
        for (index, option) in Self::OPTIONS.iter().enumerate() {
            console.print_line(&format!("  {}. {}", index + 1, option));
        }
    }

    /// Map a 1-based menu choice to a strategy
    ///
    /// # Errors
    ///
    /// Returns `MenuError::OutOfRange` for any choice outside the menu
    pub fn select(&self, choice: i64) -> Result<Box<dyn PaymentStrategy>, MenuError> {
        match choice {
            1 => Ok(Box::new(CreditCardPayment::new(&self.config.card_number))),
            2 => Ok(Box::new(PayPalPayment::new(&self.config.paypal_email))),
            3 => Ok(Box::new(CryptoPayment::new(&self.config.crypto_wallet))),
            _ => Err(MenuError::OutOfRange {
                choice,
                max: Self::OPTIONS.len() as i64,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::console::ScriptedConsole;

    #[test]
    fn test_payment_without_strategy_warns() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        let context = PaymentContext::new(&console);

        assert_eq!(context.execute_payment(1000.0), PaymentOutcome::NoStrategy);
        assert_eq!(console.lines(), vec!["⚠️ Payment method is not selected!"]);
    }

    #[test]
    fn test_swapped_strategy_applies_to_next_payment() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        let mut context = PaymentContext::new(&console);

        context.set_strategy(Box::new(CreditCardPayment::new("1111222233334444")));
        assert_eq!(
            context.execute_payment(100.0),
            PaymentOutcome::Paid("💳 Paid 100 tg by card **** 4444".to_string())
        );

        context.set_strategy(Box::new(PayPalPayment::new("a@b.kz")));
        assert_eq!(context.strategy_name(), Some("PayPal"));
        assert_eq!(
            context.execute_payment(100.0),
            PaymentOutcome::Paid("🅿️ Paid 100 tg via PayPal (a@b.kz)".to_string())
        );
    }

    #[test]
    fn test_menu_selects_each_option() {
        let config = PaymentsConfig::default();
        let menu = PaymentMenu::new(&config);

        for (choice, name) in (1..=3).zip(PaymentMenu::OPTIONS) {
            assert_eq!(menu.select(choice).unwrap().name(), name);
        }
    }

    #[test]
    fn test_menu_rejects_out_of_range() {
        let config = PaymentsConfig::default();
        let menu = PaymentMenu::new(&config);

        assert_eq!(menu.select(0).err(), Some(MenuError::OutOfRange { choice: 0, max: 3 }));
        assert_eq!(menu.select(4).err(), Some(MenuError::OutOfRange { choice: 4, max: 3 }));
        assert_eq!(menu.select(-1).err(), Some(MenuError::OutOfRange { choice: -1, max: 3 }));
    }
}
