use super::Console;

/// Steps a drink recipe must provide. The order they run in is fixed by
/// [`PrepareRecipe::prepare_recipe`].
pub trait Recipe {
    fn name(&self) -> &str;

    fn brew(&self) -> String;

    fn add_condiments(&self) -> String;

    /// Hook deciding whether condiments are added
    fn customer_wants_condiments(&self, _console: &dyn Console) -> bool {
        true
    }
}

/// What happened while a recipe was prepared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preparation {
    pub steps: Vec<String>,
    pub condiments_added: bool,
}

/// The preparation skeleton. Implemented for every `Recipe` and not
/// overridable by them.
pub trait PrepareRecipe {
    fn prepare_recipe(&self, console: &dyn Console) -> Preparation;
}

impl<R: Recipe + ?Sized> PrepareRecipe for R {
    fn prepare_recipe(&self, console: &dyn Console) -> Preparation {
        tracing::debug!("Preparing {}", self.name());

        let mut steps = vec![boil_water(), self.brew(), pour_in_cup()];
        for step in &steps {
            console.print_line(step);
        }

        let condiments_added = self.customer_wants_condiments(console);
        if condiments_added {
            let step = self.add_condiments();
            console.print_line(&step);
            steps.push(step);
        }

        Preparation {
            steps,
            condiments_added,
        }
    }
}

fn boil_water() -> String {
    "💧 Water boiled".to_string()
}

fn pour_in_cup() -> String {
    "☕ Poured into cup".to_string()
}
