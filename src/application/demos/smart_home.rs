//! Command demo: a remote control driving smart-home devices

use crate::application::errors::DemoError;
use crate::application::services::Invoker;
use crate::domain::entities::{Door, DoorOpenCommand, Light, LightOnCommand, Thermostat, ThermostatIncreaseCommand};
use crate::domain::traits::Console;
use crate::infrastructure::config::SmartHomeConfig;

pub fn run(config: &SmartHomeConfig, console: &dyn Console) -> Result<(), DemoError> {
    let light = Light::new();
    let door = Door::new();
    let thermostat = Thermostat::new(config.initial_temperature);
    let mut remote = Invoker::new(console);

    remote.execute_command(Box::new(LightOnCommand::new(&light)));
    remote.execute_command(Box::new(DoorOpenCommand::new(&door)));
    remote.execute_command(Box::new(ThermostatIncreaseCommand::new(&thermostat)));

    for _ in 0..config.undo_count {
        remote.undo_last_command();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::console::ScriptedConsole;

    #[test]
    fn test_default_scenario_undoes_thermostat() {
        let console = ScriptedConsole::new(Vec::<String>::new());

        run(&SmartHomeConfig::default(), &console).unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "💡 Light turned on",
                "🚪 Door opened",
                "🔥 Temperature raised: 23°C",
                "⏪ Last action undone:",
                "❄️ Temperature lowered: 22°C",
            ]
        );
    }

    #[test]
    fn test_extra_undo_reports_empty_history() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        let config = SmartHomeConfig {
            initial_temperature: 18,
            undo_count: 4,
        };

        run(&config, &console).unwrap();

        let lines = console.lines();
        assert_eq!(lines.last().map(String::as_str), Some("❗ Nothing to undo!"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("⏪")).count(), 3);
    }
}
