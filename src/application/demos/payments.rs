//! Strategy + observer demo: swappable payment methods and a currency feed

use std::ops::ControlFlow;
use crate::application::errors::DemoError;
use crate::application::services::{CurrencyExchange, PaymentContext, PaymentMenu};
use crate::domain::entities::{BankDisplay, CreditCardPayment, MobileApp, NewsAgency, PayPalPayment};
use crate::domain::traits::Console;
use crate::infrastructure::config::{CurrencyConfig, PaymentsConfig};

pub fn run(payments: &PaymentsConfig, currency: &CurrencyConfig, console: &dyn Console) -> Result<(), DemoError> {
    if run_strategy(payments, console)?.is_break() {
        return Ok(());
    }
    run_observer(currency, console);
    Ok(())
}

/// Pay with no method, by card, by PayPal, then with whatever the
/// customer picks from the menu. Breaks on an invalid menu choice.
fn run_strategy(config: &PaymentsConfig, console: &dyn Console) -> Result<ControlFlow<()>, DemoError> {
    let mut context = PaymentContext::new(console);
    context.execute_payment(config.amount);

    context.set_strategy(Box::new(CreditCardPayment::new(&config.card_number)));
    context.execute_payment(config.amount);

    context.set_strategy(Box::new(PayPalPayment::new(&config.paypal_email)));
    context.execute_payment(config.amount);

    let menu = PaymentMenu::new(config);
    menu.print(console);
    let choice = console.read_number("Your choice: ")?;
    match menu.select(choice) {
        Ok(strategy) => {
            context.set_strategy(strategy);
            context.execute_payment(config.amount);
        }
        Err(e) => {
            console.print_line(&format!("❌ Invalid choice: {}", e));
            return Ok(ControlFlow::Break(()));
        }
    }

    Ok(ControlFlow::Continue(()))
}

/// Publish each configured rate; the mobile app unsubscribes after the first
fn run_observer(config: &CurrencyConfig, console: &dyn Console) {
    let bank = BankDisplay::new(console);
    let app = MobileApp::new(console);
    let news = NewsAgency::new(console);
    let mut exchange = CurrencyExchange::new(config.initial_rate);

    exchange.attach(&bank);
    exchange.attach(&app);
    exchange.attach(&news);

    for (index, rate) in config.rates.iter().enumerate() {
        exchange.set_usd_rate(*rate);
        if index == 0 {
            exchange.detach(&app);
            console.print_line("🔕 Mobile app unsubscribed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::InputError;
    use crate::infrastructure::adapters::console::ScriptedConsole;

    #[test]
    fn test_menu_choice_pays_with_selected_method() {
        let console = ScriptedConsole::new(["3"]);

        run(&PaymentsConfig::default(), &CurrencyConfig::default(), &console).unwrap();

        let lines = console.lines();
        assert_eq!(lines[0], "⚠️ Payment method is not selected!");
        assert!(lines.iter().any(|l| l.starts_with("🪙 Paid 2500 tg")));
    }

    #[test]
    fn test_out_of_range_choice_returns_early() {
        let console = ScriptedConsole::new(["9"]);

        let flow = run(&PaymentsConfig::default(), &CurrencyConfig::default(), &console);
        assert!(flow.is_ok());

        let lines = console.lines();
        assert_eq!(
            lines.last().map(String::as_str),
            Some("❌ Invalid choice: choice 9 is out of range (1-3)")
        );
        assert_eq!(lines.iter().filter(|l| l.contains("Paid")).count(), 2);
        assert!(!lines.iter().any(|l| l.starts_with("🏦")));
    }

    #[test]
    fn test_negative_and_zero_choices_are_invalid_not_fatal() {
        for answer in ["-1", "0"] {
            let console = ScriptedConsole::new([answer]);

            let result = run(&PaymentsConfig::default(), &CurrencyConfig::default(), &console);

            assert!(result.is_ok(), "answer {:?}", answer);
            let expected = format!("❌ Invalid choice: choice {} is out of range (1-3)", answer);
            assert_eq!(console.lines().last(), Some(&expected));
        }
    }

    #[test]
    fn test_non_numeric_choice_is_fatal() {
        let console = ScriptedConsole::new(["card"]);

        let err = run(&PaymentsConfig::default(), &CurrencyConfig::default(), &console).unwrap_err();

        assert!(matches!(err, DemoError::Input(InputError::NotANumber(_))));
    }

    #[test]
    fn test_unsubscribed_app_misses_later_rates() {
        let console = ScriptedConsole::new(Vec::<String>::new());

        run_observer(&CurrencyConfig::default(), &console);

        let lines = console.lines();
        assert_eq!(lines.iter().filter(|l| l.starts_with("🏦")).count(), 2);
        assert_eq!(lines.iter().filter(|l| l.starts_with("📰")).count(), 2);
        assert_eq!(lines.iter().filter(|l| l.starts_with("📱")).count(), 1);
        assert_eq!(lines[0], "🏦 Bank display: 1 USD = 470.5 tg");
    }
}
