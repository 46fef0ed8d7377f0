//! Coffee-shop drinks and the condiment decorators that wrap them

use serde::{Deserialize, Serialize};
use crate::domain::traits::Beverage;

pub struct Espresso;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }

    fn cost(&self) -> f64 {
        700.0
    }
}

pub struct Tea;

impl Beverage for Tea {
    fn description(&self) -> String {
        "Tea".to_string()
    }

    fn cost(&self) -> f64 {
        500.0
    }
}

pub struct Latte;

impl Beverage for Latte {
    fn description(&self) -> String {
        "Latte".to_string()
    }

    fn cost(&self) -> f64 {
        900.0
    }
}

pub struct Mocha;

impl Beverage for Mocha {
    fn description(&self) -> String {
        "Mocha".to_string()
    }

    fn cost(&self) -> f64 {
        950.0
    }
}

/// Declares a decorator that owns its inner beverage and adds a fixed
/// label and price on top of it.
macro_rules! condiment_decorator {
    ($(#[$meta:meta])* $name:ident, $label:literal, $price:literal) => {
        $(#[$meta])*
        pub struct $name {
            beverage: Box<dyn Beverage>,
        }

        impl $name {
            pub const LABEL: &'static str = $label;
            pub const PRICE: f64 = $price;

            pub fn new(beverage: Box<dyn Beverage>) -> Self {
                Self { beverage }
            }
        }

        impl Beverage for $name {
            fn description(&self) -> String {
                format!("{}, {}", self.beverage.description(), Self::LABEL)
            }

            fn cost(&self) -> f64 {
                self.beverage.cost() + Self::PRICE
            }
        }
    };
}

condiment_decorator!(Milk, "Milk", 150.0);
condiment_decorator!(Sugar, "Sugar", 50.0);
condiment_decorator!(
    /// The priciest topping
    WhippedCream,
    "Whipped Cream",
    200.0
);

/// Base drinks an order can start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseBeverage {
    Espresso,
    Tea,
    Latte,
    Mocha,
}

impl BaseBeverage {
    pub fn build(self) -> Box<dyn Beverage> {
        match self {
            BaseBeverage::Espresso => Box::new(Espresso),
            BaseBeverage::Tea => Box::new(Tea),
            BaseBeverage::Latte => Box::new(Latte),
            BaseBeverage::Mocha => Box::new(Mocha),
        }
    }
}

/// Condiments an order can be wrapped in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condiment {
    Milk,
    Sugar,
    WhippedCream,
}

impl Condiment {
    pub fn wrap(self, beverage: Box<dyn Beverage>) -> Box<dyn Beverage> {
        match self {
            Condiment::Milk => Box::new(Milk::new(beverage)),
            Condiment::Sugar => Box::new(Sugar::new(beverage)),
            Condiment::WhippedCream => Box::new(WhippedCream::new(beverage)),
        }
    }

    pub fn price(self) -> f64 {
        match self {
            Condiment::Milk => Milk::PRICE,
            Condiment::Sugar => Sugar::PRICE,
            Condiment::WhippedCream => WhippedCream::PRICE,
        }
    }
}

/// A drink order as data: a base plus condiments in wrap order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Order {
    pub base: BaseBeverage,
    #[serde(default)]
    pub condiments: Vec<Condiment>,
}

impl Order {
    pub fn new(base: BaseBeverage) -> Self {
        Self {
            base,
            condiments: Vec::new(),
        }
    }

    pub fn with(mut self, condiment: Condiment) -> Self {
        self.condiments.push(condiment);
        self
    }

    /// Build the decorator chain, innermost condiment first
    pub fn build(&self) -> Box<dyn Beverage> {
        self.condiments
            .iter()
            .fold(self.base.build(), |beverage, condiment| condiment.wrap(beverage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milk_sugar_espresso() {
        let order = Milk::new(Box::new(Sugar::new(Box::new(Espresso))));

        assert_eq!(order.description(), "Espresso, Sugar, Milk");
        assert_eq!(order.cost(), 900.0);
    }

    #[test]
    fn test_cost_is_independent_of_wrap_order() {
        let stacks = [
            vec![Condiment::WhippedCream, Condiment::Sugar, Condiment::Milk],
            vec![Condiment::Milk, Condiment::WhippedCream, Condiment::Sugar],
            vec![Condiment::Sugar, Condiment::Milk, Condiment::WhippedCream],
        ];

        for condiments in stacks {
            let order = Order {
                base: BaseBeverage::Latte,
                condiments: condiments.clone(),
            };
            let expected = 900.0 + condiments.iter().map(|c| c.price()).sum::<f64>();
            assert_eq!(order.build().cost(), expected);
            assert_eq!(order.build().cost(), 1300.0);
        }
    }

    #[test]
    fn test_description_follows_wrap_order() {
        let order = Order::new(BaseBeverage::Latte)
            .with(Condiment::WhippedCream)
            .with(Condiment::Sugar)
            .with(Condiment::Milk);

        assert_eq!(order.build().description(), "Latte, Whipped Cream, Sugar, Milk");
    }

    #[test]
    fn test_repeated_condiment_adds_each_time() {
        let order = Order::new(BaseBeverage::Tea)
            .with(Condiment::Sugar)
            .with(Condiment::Sugar);

        let beverage = order.build();
        assert_eq!(beverage.description(), "Tea, Sugar, Sugar");
        assert_eq!(beverage.cost(), 600.0);
    }

    #[test]
    fn test_order_from_yaml() {
        let order: Order = serde_yaml::from_str("base: mocha\ncondiments: [whipped-cream]\n").unwrap();

        assert_eq!(order, Order::new(BaseBeverage::Mocha).with(Condiment::WhippedCream));
        assert_eq!(order.build().cost(), 1150.0);
    }
}
