use uuid::Uuid;
use crate::domain::traits::{Colleague, Console, Mediator};

/// A chat participant that talks only through its mediator
pub struct ChatUser<'a> {
    id: Uuid,
    name: String,
    mediator: &'a dyn Mediator,
    console: &'a dyn Console,
}

impl<'a> ChatUser<'a> {
    pub fn new(name: impl Into<String>, mediator: &'a dyn Mediator, console: &'a dyn Console) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mediator,
            console,
        }
    }

    pub fn send(&self, message: &str) {
        self.console
            .print_line(&format!("💬 {} sends: {}", self.name, message));
        self.mediator.send_message(message, self);
    }
}

impl Colleague for ChatUser<'_> {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str, sender_name: &str) {
        self.console
            .print_line(&format!("📩 {} received ({}): {}", self.name, sender_name, message));
    }
}
