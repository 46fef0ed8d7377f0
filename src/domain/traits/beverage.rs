/// A coffee-shop drink, plain or wrapped in condiment decorators
pub trait Beverage {
    fn description(&self) -> String;

    /// Price in tenge
    fn cost(&self) -> f64;
}
