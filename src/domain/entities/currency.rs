//! Observers that follow the USD exchange rate

use crate::domain::traits::{Console, CurrencyObserver};

pub struct BankDisplay<'a> {
    console: &'a dyn Console,
}

impl<'a> BankDisplay<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }
}

impl CurrencyObserver for BankDisplay<'_> {
    fn name(&self) -> &str {
        "Bank display"
    }

    fn update(&self, usd_rate: f64) {
        self.console
            .print_line(&format!("🏦 Bank display: 1 USD = {} tg", usd_rate));
    }
}

pub struct MobileApp<'a> {
    console: &'a dyn Console,
}

impl<'a> MobileApp<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }
}

impl CurrencyObserver for MobileApp<'_> {
    fn name(&self) -> &str {
        "Mobile app"
    }

    fn update(&self, usd_rate: f64) {
        self.console
            .print_line(&format!("📱 Mobile app push: USD is now {} tg", usd_rate));
    }
}

pub struct NewsAgency<'a> {
    console: &'a dyn Console,
}

impl<'a> NewsAgency<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }
}

impl CurrencyObserver for NewsAgency<'_> {
    fn name(&self) -> &str {
        "News agency"
    }

    fn update(&self, usd_rate: f64) {
        self.console
            .print_line(&format!("📰 News: the dollar moved to {} tg", usd_rate));
    }
}
