//! Chat room - Relays messages between users

use std::cell::RefCell;
use crate::domain::traits::{Colleague, Console, Mediator};

/// Mediator that keeps the roster and broadcasts to it
pub struct ChatRoom<'a> {
    users: RefCell<Vec<&'a dyn Colleague>>,
    console: &'a dyn Console,
}

impl<'a> ChatRoom<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self {
            users: RefCell::new(Vec::new()),
            console,
        }
    }

    /// Append a user to the roster
    pub fn add_user(&self, user: &'a dyn Colleague) {
        self.users.borrow_mut().push(user);
        self.console
            .print_line(&format!("👤 {} joined the chat.", user.name()));
    }

    pub fn roster_names(&self) -> Vec<String> {
        self.users.borrow().iter().map(|u| u.name().to_string()).collect()
    }
}

impl Mediator for ChatRoom<'_> {
    fn send_message(&self, message: &str, sender: &dyn Colleague) {
        let sender_id = sender.id();
        let recipients: Vec<_> = self
            .users
            .borrow()
            .iter()
            .copied()
            .filter(|u| u.id() != sender_id)
            .collect();

        tracing::debug!("Relaying message from {} to {} users", sender.name(), recipients.len());
        for user in recipients {
            user.receive(message, sender.name());
        }
    }
}
