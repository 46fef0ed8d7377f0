//! Hot drinks prepared through the fixed recipe skeleton

use crate::domain::traits::{Console, Recipe};

/// Answer that counts as "yes" when none is configured
pub const DEFAULT_AFFIRMATIVE: &str = "yes";

pub struct Tea;

impl Recipe for Tea {
    fn name(&self) -> &str {
        "Tea"
    }

    fn brew(&self) -> String {
        "🍵 Tea steeped".to_string()
    }

    fn add_condiments(&self) -> String {
        "🍋 Lemon added".to_string()
    }
}

/// Coffee asks the customer before adding sugar and milk
pub struct Coffee {
    affirmative: String,
}

impl Coffee {
    pub fn new() -> Self {
        Self::with_affirmative(DEFAULT_AFFIRMATIVE)
    }

    pub fn with_affirmative(affirmative: impl Into<String>) -> Self {
        Self {
            affirmative: affirmative.into(),
        }
    }

    /// Only the affirmative word (any case) means yes; anything else,
    /// including no answer at all, means no.
    pub fn is_affirmative(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.affirmative.to_lowercase()
    }
}

impl Default for Coffee {
    fn default() -> Self {
        Self::new()
    }
}

impl Recipe for Coffee {
    fn name(&self) -> &str {
        "Coffee"
    }

    fn brew(&self) -> String {
        "☕ Coffee brewed".to_string()
    }

    fn add_condiments(&self) -> String {
        "🥛 Sugar and milk added".to_string()
    }

    fn customer_wants_condiments(&self, console: &dyn Console) -> bool {
        let prompt = format!("Would you like sugar and milk ({}/no)? ", self.affirmative);
        console
            .read_line(&prompt)
            .map(|answer| self.is_affirmative(&answer))
            .unwrap_or(false)
    }
}

pub struct HotChocolate;

impl Recipe for HotChocolate {
    fn name(&self) -> &str {
        "Hot chocolate"
    }

    fn brew(&self) -> String {
        "🍫 Cocoa powder stirred in".to_string()
    }

    fn add_condiments(&self) -> String {
        "🍬 Cream and marshmallows added".to_string()
    }
}
