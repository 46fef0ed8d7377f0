//! Smart-home devices driven by commands

use std::cell::Cell;

/// Thermostat temperature when none is configured
pub const DEFAULT_TEMPERATURE: i32 = 22;

#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&self) -> String {
        self.on.set(true);
        "💡 Light turned on".to_string()
    }

    pub fn turn_off(&self) -> String {
        self.on.set(false);
        "🌑 Light turned off".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }
}

#[derive(Debug, Default)]
pub struct Door {
    open: Cell<bool>,
}

impl Door {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> String {
        self.open.set(true);
        "🚪 Door opened".to_string()
    }

    pub fn close(&self) -> String {
        self.open.set(false);
        "🔒 Door closed".to_string()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }
}

#[derive(Debug)]
pub struct Thermostat {
    temperature: Cell<i32>,
}

impl Thermostat {
    pub fn new(temperature: i32) -> Self {
        Self {
            temperature: Cell::new(temperature),
        }
    }

    pub fn increase(&self) -> String {
        let temperature = self.temperature.get() + 1;
        self.temperature.set(temperature);
        format!("🔥 Temperature raised: {}°C", temperature)
    }

    pub fn decrease(&self) -> String {
        let temperature = self.temperature.get() - 1;
        self.temperature.set(temperature);
        format!("❄️ Temperature lowered: {}°C", temperature)
    }

    pub fn temperature(&self) -> i32 {
        self.temperature.get()
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermostat_steps_one_degree() {
        let thermostat = Thermostat::default();

        assert_eq!(thermostat.increase(), "🔥 Temperature raised: 23°C");
        assert_eq!(thermostat.decrease(), "❄️ Temperature lowered: 22°C");
        assert_eq!(thermostat.temperature(), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_light_and_door_track_state() {
        let light = Light::new();
        let door = Door::new();

        light.turn_on();
        door.open();
        assert!(light.is_on());
        assert!(door.is_open());

        light.turn_off();
        door.close();
        assert!(!light.is_on());
        assert!(!door.is_open());
    }
}
