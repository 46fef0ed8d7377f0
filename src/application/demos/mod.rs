//! Demo drivers - Wire the pattern participants together and run a scenario

pub mod coffee_shop;
pub mod chat;
pub mod payments;
pub mod recipes;
pub mod smart_home;

use crate::application::errors::DemoError;
use crate::domain::traits::Console;
use crate::infrastructure::config::Config;

/// The five independent demos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    SmartHome,
    Recipes,
    Chat,
    Payments,
    CoffeeShop,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::SmartHome,
        Demo::Recipes,
        Demo::Chat,
        Demo::Payments,
        Demo::CoffeeShop,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::SmartHome => "🏠 PATTERN: COMMAND (Smart home)",
            Demo::Recipes => "☕ PATTERN: TEMPLATE METHOD (Beverages)",
            Demo::Chat => "💬 PATTERN: MEDIATOR (Chat)",
            Demo::Payments => "💳 PATTERNS: STRATEGY + OBSERVER (Payments)",
            Demo::CoffeeShop => "🧁 PATTERNS: DECORATOR + ADAPTER (Coffee shop)",
        }
    }

    /// Print the banner and run the demo
    pub fn run(self, config: &Config, console: &dyn Console) -> Result<(), DemoError> {
        tracing::info!("Running demo: {:?}", self);
        print_banner(console, self.title());

        match self {
            Demo::SmartHome => smart_home::run(&config.smart_home, console),
            Demo::Recipes => recipes::run(&config.beverages, console),
            Demo::Chat => chat::run(&config.chat, console),
            Demo::Payments => payments::run(&config.payments, &config.currency, console),
            Demo::CoffeeShop => coffee_shop::run(&config.coffee_shop, console),
        }
    }
}

fn print_banner(console: &dyn Console, title: &str) {
    let rule = "=".repeat(28);
    console.print_line("");
    console.print_line(&rule);
    console.print_line(title);
    console.print_line(&rule);
}
