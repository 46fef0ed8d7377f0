//! Demo flow integration tests
//! Run with: cargo test --test demo_flow_test

use std::sync::Once;

use pattern_demos::application::demos::Demo;
use pattern_demos::application::errors::{DemoError, InputError};
use pattern_demos::application::services::{Invoker, UndoOutcome};
use pattern_demos::domain::entities::{Espresso, Light, LightOnCommand, Milk, Sugar};
use pattern_demos::domain::traits::Beverage;
use pattern_demos::infrastructure::adapters::ScriptedConsole;
use pattern_demos::infrastructure::config::Config;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn run_all(answers: &[&str]) -> (Result<(), DemoError>, Vec<String>) {
    let console = ScriptedConsole::new(answers.iter().copied());
    let config = Config::default();
    let result = Demo::ALL
        .iter()
        .try_for_each(|demo| demo.run(&config, &console));
    (result, console.lines())
}

#[test]
fn test_all_demos_run_in_order() {
    ensure_init();

    let (result, lines) = run_all(&["yes", "1"]);

    assert!(result.is_ok());
    let titles: Vec<&String> = lines.iter().filter(|l| l.contains("PATTERN")).collect();
    assert_eq!(titles.len(), Demo::ALL.len());
    assert!(titles[0].contains("COMMAND"));
    assert!(titles[4].contains("DECORATOR"));
    assert!(lines.contains(&"🥛 Sugar and milk added".to_string()));
    assert!(lines.contains(&"💳 Paid 2500 tg by card **** 6789".to_string()));
}

#[test]
fn test_run_stops_at_malformed_number() {
    ensure_init();

    let (result, lines) = run_all(&["no", "one"]);

    assert!(matches!(result, Err(DemoError::Input(InputError::NotANumber(ref t))) if t == "one"));
    // coffee shop never ran
    assert!(!lines.iter().any(|l| l.contains("DECORATOR")));
}

#[test]
fn test_out_of_range_menu_does_not_stop_the_run() {
    ensure_init();

    let (result, lines) = run_all(&["no", "42"]);

    assert!(result.is_ok());
    assert!(lines.iter().any(|l| l.starts_with("❌ Invalid choice")));
    assert!(lines.iter().any(|l| l.contains("DECORATOR")));
}

#[test]
fn test_decorator_example() {
    let order = Milk::new(Box::new(Sugar::new(Box::new(Espresso))));

    assert_eq!(order.description(), "Espresso, Sugar, Milk");
    assert_eq!(order.cost(), 700.0 + 50.0 + 150.0);
}

#[test]
fn test_undo_on_fresh_invoker() {
    let console = ScriptedConsole::new(Vec::<String>::new());
    let light = Light::new();
    let mut invoker = Invoker::new(&console);

    assert_eq!(invoker.undo_last_command(), UndoOutcome::NothingToUndo);

    invoker.execute_command(Box::new(LightOnCommand::new(&light)));
    assert!(matches!(invoker.undo_last_command(), UndoOutcome::Undone(_)));
    assert_eq!(invoker.undo_last_command(), UndoOutcome::NothingToUndo);
}
