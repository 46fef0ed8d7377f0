use crate::domain::traits::CurrencyObserver;

/// Subject holding the USD rate and the observers that follow it
pub struct CurrencyExchange<'a> {
    usd_rate: f64,
    observers: Vec<&'a dyn CurrencyObserver>,
}

impl<'a> CurrencyExchange<'a> {
    pub fn new(usd_rate: f64) -> Self {
        Self {
            usd_rate,
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: &'a dyn CurrencyObserver) {
        tracing::debug!("Attached observer {}", observer.name());
        self.observers.push(observer);
    }

    /// Remove an observer by identity. Unknown observers are ignored.
    pub fn detach(&mut self, observer: &dyn CurrencyObserver) {
        let before = self.observers.len();
        self.observers.retain(|o| !std::ptr::addr_eq(*o, observer));
        if self.observers.len() < before {
            tracing::debug!("Detached observer {}", observer.name());
        }
    }

    /// Store the new rate and notify observers in attachment order
    pub fn set_usd_rate(&mut self, usd_rate: f64) {
        self.usd_rate = usd_rate;
        tracing::debug!("USD rate {} -> {} observers", usd_rate, self.observers.len());
        for observer in &self.observers {
            observer.update(usd_rate);
        }
    }

    pub fn usd_rate(&self) -> f64 {
        self.usd_rate
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
