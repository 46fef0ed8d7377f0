/// Interchangeable payment algorithm selected by a `PaymentContext`
pub trait PaymentStrategy {
    /// Menu label
    fn name(&self) -> &str;

    /// Pay `amount` tenge, returning the status line
    fn pay(&self, amount: f64) -> String;
}

/// Common interface the checkout uses for every payment provider
pub trait PaymentProcessor {
    /// Charge `amount` tenge, returning the provider's status line
    fn process_payment(&self, amount: f64) -> String;
}
