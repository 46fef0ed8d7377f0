/// Listener notified when the USD rate changes
pub trait CurrencyObserver {
    fn name(&self) -> &str;

    fn update(&self, usd_rate: f64);
}
