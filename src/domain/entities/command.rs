use super::device::{Door, Light, Thermostat};
use crate::domain::traits::Command;

/// Turns a light on; undo turns it off
pub struct LightOnCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOnCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand<'_> {
    fn name(&self) -> &str {
        "light-on"
    }

    fn execute(&self) -> String {
        self.light.turn_on()
    }

    fn undo(&self) -> String {
        self.light.turn_off()
    }
}

/// Opens a door; undo closes it
pub struct DoorOpenCommand<'a> {
    door: &'a Door,
}

impl<'a> DoorOpenCommand<'a> {
    pub fn new(door: &'a Door) -> Self {
        Self { door }
    }
}

impl Command for DoorOpenCommand<'_> {
    fn name(&self) -> &str {
        "door-open"
    }

    fn execute(&self) -> String {
        self.door.open()
    }

    fn undo(&self) -> String {
        self.door.close()
    }
}

/// Raises the temperature by one degree; undo lowers it back
pub struct ThermostatIncreaseCommand<'a> {
    thermostat: &'a Thermostat,
}

impl<'a> ThermostatIncreaseCommand<'a> {
    pub fn new(thermostat: &'a Thermostat) -> Self {
        Self { thermostat }
    }
}

impl Command for ThermostatIncreaseCommand<'_> {
    fn name(&self) -> &str {
        "thermostat-increase"
    }

    fn execute(&self) -> String {
        self.thermostat.increase()
    }

    fn undo(&self) -> String {
        self.thermostat.decrease()
    }
}
