//! Configuration management

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::domain::entities::{BaseBeverage, Condiment, Order, DEFAULT_TEMPERATURE};
use crate::domain::entities::recipe::DEFAULT_AFFIRMATIVE;
use crate::infrastructure::adapters::payment::Provider;

/// Thermostat start values the smart home demo accepts, in °C
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = -50..=50;

/// Demo configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub smart_home: SmartHomeConfig,
    pub beverages: BeveragesConfig,
    pub chat: ChatConfig,
    pub payments: PaymentsConfig,
    pub currency: CurrencyConfig,
    pub coffee_shop: CoffeeShopConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SmartHomeConfig {
    pub initial_temperature: i32,
    /// How many undo calls follow the three commands
    pub undo_count: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BeveragesConfig {
    /// The answer that means "yes" to the coffee condiments prompt
    pub affirmative_answer: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ChatConfig {
    pub users: Vec<String>,
    pub script: Vec<ChatLine>,
}

/// One scripted chat message
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChatLine {
    pub from: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PaymentsConfig {
    pub amount: f64,
    pub card_number: String,
    pub paypal_email: String,
    pub crypto_wallet: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CurrencyConfig {
    pub initial_rate: f64,
    /// Rates published in order; the mobile app unsubscribes after the first
    pub rates: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CoffeeShopConfig {
    pub orders: Vec<Order>,
    pub adapter_payments: AdapterPaymentsConfig,
    /// Provider that charges the total of all orders, if any
    pub checkout: Option<Provider>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AdapterPaymentsConfig {
    pub paypal: f64,
    pub stripe: f64,
    pub kaspi: f64,
}

impl Default for SmartHomeConfig {
    fn default() -> Self {
        Self {
            initial_temperature: DEFAULT_TEMPERATURE,
            undo_count: 1,
        }
    }
}

impl Default for BeveragesConfig {
    fn default() -> Self {
        Self {
            affirmative_answer: DEFAULT_AFFIRMATIVE.to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        let line = |from: &str, text: &str| ChatLine {
            from: from.to_string(),
            text: text.to_string(),
        };
        Self {
            users: vec!["Ulbo".to_string(), "Ali".to_string(), "Aisha".to_string()],
            script: vec![
                line("Ulbo", "Hello, friends!"),
                line("Ali", "Hi, Ulbo!"),
                line("Aisha", "How is everyone?"),
            ],
        }
    }
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            amount: 2500.0,
            card_number: "4400 4301 2345 6789".to_string(),
            paypal_email: "customer@example.com".to_string(),
            crypto_wallet: "0x9f2c...e41a".to_string(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            initial_rate: 450.0,
            rates: vec![470.5, 480.0],
        }
    }
}

impl Default for CoffeeShopConfig {
    fn default() -> Self {
        Self {
            orders: vec![
                Order::new(BaseBeverage::Espresso)
                    .with(Condiment::Milk)
                    .with(Condiment::Sugar),
                Order::new(BaseBeverage::Latte)
                    .with(Condiment::WhippedCream)
                    .with(Condiment::Sugar)
                    .with(Condiment::Milk),
            ],
            adapter_payments: AdapterPaymentsConfig::default(),
            checkout: Some(Provider::Kaspi),
        }
    }
}

impl Default for AdapterPaymentsConfig {
    fn default() -> Self {
        Self {
            paypal: 5000.0,
            stripe: 7500.0,
            kaspi: 10000.0,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Reject values no demo can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beverages.affirmative_answer.trim().is_empty() {
            return Err(ConfigError::MissingField("beverages.affirmative-answer".to_string()));
        }
        let temperature = self.smart_home.initial_temperature;
        if !TEMPERATURE_RANGE.contains(&temperature) {
            return Err(ConfigError::InvalidValue(format!(
                "smart-home.initial-temperature must be within {}..={}, got {}",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end(),
                temperature
            )));
        }
        if self.chat.users.is_empty() {
            return Err(ConfigError::MissingField("chat.users".to_string()));
        }

        let payments = &self.payments;
        let adapters = &self.coffee_shop.adapter_payments;
        let amounts = [
            ("payments.amount", payments.amount),
            ("coffee-shop.adapter-payments.paypal", adapters.paypal),
            ("coffee-shop.adapter-payments.stripe", adapters.stripe),
            ("coffee-shop.adapter-payments.kaspi", adapters.kaspi),
        ];
        for (field, amount) in amounts {
            if !(amount > 0.0) {
                return Err(ConfigError::InvalidValue(format!("{} must be positive, got {}", field, amount)));
            }
        }

        let currency = &self.currency;
        if let Some(rate) = std::iter::once(&currency.initial_rate)
            .chain(&currency.rates)
            .find(|rate| !(**rate > 0.0))
        {
            return Err(ConfigError::InvalidValue(format!("currency rates must be positive, got {}", rate)));
        }

        Ok(())
    }
}
