//! Decorator + adapter demo: build drink orders, then pay through
//! providers with mismatched APIs

use crate::application::errors::DemoError;
use crate::domain::traits::Console;
use crate::infrastructure::adapters::payment::Provider;
use crate::infrastructure::config::CoffeeShopConfig;

pub fn run(config: &CoffeeShopConfig, console: &dyn Console) -> Result<(), DemoError> {
    console.print_line("=== DECORATOR ===");
    let mut total = 0.0;
    for (index, order) in config.orders.iter().enumerate() {
        let beverage = order.build();
        let cost = beverage.cost();
        console.print_line(&format!("Order {}: {}", index + 1, beverage.description()));
        console.print_line(&format!("Total cost: {} tg", cost));
        total += cost;
    }

    console.print_line("=== ADAPTER ===");
    let charges = &config.adapter_payments;
    for (provider, amount) in Provider::ALL.into_iter().zip([charges.paypal, charges.stripe, charges.kaspi]) {
        console.print_line(&provider.processor().process_payment(amount));
    }

    if let Some(provider) = config.checkout {
        if total > 0.0 {
            tracing::debug!("Checking out {} tg via {:?}", total, provider);
            console.print_line(&format!("Checkout for all orders: {} tg", total));
            console.print_line(&provider.processor().process_payment(total));
        }
    }

    Ok(())
}
