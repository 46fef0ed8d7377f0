//! Payment providers and the adapters that fit them to `PaymentProcessor`
//!
//! PayPal already speaks our interface. Stripe and Kaspi ship their own
//! service APIs, so each gets an adapter that forwards the amount untouched.

use serde::{Deserialize, Serialize};
use crate::domain::traits::PaymentProcessor;

pub struct PayPalPaymentProcessor;

impl PaymentProcessor for PayPalPaymentProcessor {
    fn process_payment(&self, amount: f64) -> String {
        format!("Processing PayPal payment of {} tg...", amount)
    }
}

/// Stripe's client, with its own method name
pub struct StripePaymentService;

impl StripePaymentService {
    pub fn make_transaction(&self, total_amount: f64) -> String {
        format!("Processing Stripe transaction of {} tg...", total_amount)
    }
}

pub struct StripePaymentAdapter {
    stripe_service: StripePaymentService,
}

impl StripePaymentAdapter {
    pub fn new(stripe_service: StripePaymentService) -> Self {
        Self { stripe_service }
    }
}

impl PaymentProcessor for StripePaymentAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.stripe_service.make_transaction(amount)
    }
}

/// Kaspi Pay's client, with its own method name
pub struct KaspiPayService;

impl KaspiPayService {
    pub fn send_payment(&self, sum: f64) -> String {
        format!("Processing Kaspi payment of {} tg...", sum)
    }
}

pub struct KaspiPaymentAdapter {
    kaspi_service: KaspiPayService,
}

impl KaspiPaymentAdapter {
    pub fn new(kaspi_service: KaspiPayService) -> Self {
        Self { kaspi_service }
    }
}

impl PaymentProcessor for KaspiPaymentAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.kaspi_service.send_payment(amount)
    }
}

/// Payment providers the coffee shop accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    #[serde(rename = "paypal")]
    PayPal,
    Stripe,
    Kaspi,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::PayPal, Provider::Stripe, Provider::Kaspi];

    /// Processor for this provider, adapted where needed
    pub fn processor(self) -> Box<dyn PaymentProcessor> {
        match self {
            Provider::PayPal => Box::new(PayPalPaymentProcessor),
            Provider::Stripe => Box::new(StripePaymentAdapter::new(StripePaymentService)),
            Provider::Kaspi => Box::new(KaspiPaymentAdapter::new(KaspiPayService)),
        }
    }
}
