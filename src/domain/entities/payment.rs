//! Payment strategies a customer can pick at checkout

use crate::domain::traits::PaymentStrategy;

pub struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }

    /// Card number with everything but the last four digits hidden
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let visible = digits.len().saturating_sub(4);
        let tail: String = digits[visible..].iter().collect();
        format!("**** {}", tail)
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn name(&self) -> &str {
        "Credit card"
    }

    fn pay(&self, amount: f64) -> String {
        format!("💳 Paid {} tg by card {}", amount, self.masked_number())
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn name(&self) -> &str {
        "PayPal"
    }

    fn pay(&self, amount: f64) -> String {
        format!("🅿️ Paid {} tg via PayPal ({})", amount, self.email)
    }
}

pub struct CryptoPayment {
    wallet: String,
}

impl CryptoPayment {
    pub fn new(wallet: impl Into<String>) -> Self {
        Self { wallet: wallet.into() }
    }
}

impl PaymentStrategy for CryptoPayment {
    fn name(&self) -> &str {
        "Crypto"
    }

    fn pay(&self, amount: f64) -> String {
        format!("🪙 Paid {} tg from wallet {}", amount, self.wallet)
    }
}
