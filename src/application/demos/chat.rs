//! Mediator demo: users chatting through a room

use crate::application::errors::DemoError;
use crate::application::messaging::ChatRoom;
use crate::domain::entities::ChatUser;
use crate::domain::traits::{Colleague, Console};
use crate::infrastructure::config::ChatConfig;

pub fn run(config: &ChatConfig, console: &dyn Console) -> Result<(), DemoError> {
    let room = ChatRoom::new(console);
    let users: Vec<ChatUser> = config
        .users
        .iter()
        .map(|name| ChatUser::new(name.as_str(), &room, console))
        .collect();

    for user in &users {
        room.add_user(user);
    }

    for line in &config.script {
        match users.iter().find(|u| u.name() == line.from) {
            Some(user) => user.send(&line.text),
            None => tracing::warn!("Skipping message from {}: not in the chat", line.from),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::console::ScriptedConsole;
    use crate::infrastructure::config::ChatLine;

    #[test]
    fn test_default_conversation() {
        let console = ScriptedConsole::new(Vec::<String>::new());

        run(&ChatConfig::default(), &console).unwrap();

        let lines = console.lines();
        assert_eq!(lines.iter().filter(|l| l.starts_with("👤")).count(), 3);
        assert_eq!(lines.iter().filter(|l| l.starts_with("💬")).count(), 3);
        // three messages, each delivered to the two other users
        assert_eq!(lines.iter().filter(|l| l.starts_with("📩")).count(), 6);
        assert!(lines.contains(&"📩 Ali received (Ulbo): Hello, friends!".to_string()));
    }

    #[test]
    fn test_unknown_sender_is_skipped() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        let config = ChatConfig {
            users: vec!["Ulbo".to_string(), "Ali".to_string()],
            script: vec![ChatLine {
                from: "Mallory".to_string(),
                text: "let me in".to_string(),
            }],
        };

        run(&config, &console).unwrap();

        assert_eq!(console.lines().len(), 2);
    }
}
