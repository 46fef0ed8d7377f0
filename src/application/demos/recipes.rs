//! Template method demo: three drinks, one preparation skeleton

use crate::application::errors::DemoError;
use crate::domain::entities::{Coffee, HotChocolate, TeaRecipe};
use crate::domain::traits::{Console, PrepareRecipe, Recipe};
use crate::infrastructure::config::BeveragesConfig;

pub fn run(config: &BeveragesConfig, console: &dyn Console) -> Result<(), DemoError> {
    let coffee = Coffee::with_affirmative(&config.affirmative_answer);
    let recipes: [&dyn Recipe; 3] = [&TeaRecipe, &coffee, &HotChocolate];

    for recipe in recipes {
        console.print_line(&format!("-- {} --", recipe.name()));
        let preparation = recipe.prepare_recipe(console);
        tracing::debug!("{}: {} steps", recipe.name(), preparation.steps.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::console::ScriptedConsole;

    #[test]
    fn test_only_coffee_asks() {
        let console = ScriptedConsole::new(["no"]);

        run(&BeveragesConfig::default(), &console).unwrap();

        assert_eq!(console.prompts(), vec!["Would you like sugar and milk (yes/no)? "]);
        let lines = console.lines();
        assert!(lines.contains(&"🍋 Lemon added".to_string()));
        assert!(!lines.contains(&"🥛 Sugar and milk added".to_string()));
        assert!(lines.contains(&"🍬 Cream and marshmallows added".to_string()));
    }

    #[test]
    fn test_coffee_gets_condiments_on_yes() {
        let console = ScriptedConsole::new(["YES"]);

        run(&BeveragesConfig::default(), &console).unwrap();

        assert!(console.lines().contains(&"🥛 Sugar and milk added".to_string()));
    }
}
