use crate::domain::traits::{Command, Console};

/// Result of an undo request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The most recent command was reversed; holds its status line
    Undone(String),
    /// History was empty
    NothingToUndo,
}

/// Remote control that runs commands and remembers them for undo
pub struct Invoker<'a> {
    history: Vec<Box<dyn Command + 'a>>,
    console: &'a dyn Console,
}

impl<'a> Invoker<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self {
            history: Vec::new(),
            console,
        }
    }

    /// Run the command and push it onto the history
    pub fn execute_command(&mut self, command: Box<dyn Command + 'a>) -> String {
        let status = command.execute();
        self.console.print_line(&status);
        tracing::debug!("Executed {} (history: {})", command.name(), self.history.len() + 1);
        self.history.push(command);
        status
    }

    /// Pop the most recent command and reverse it
    pub fn undo_last_command(&mut self) -> UndoOutcome {
        let Some(last) = self.history.pop() else {
            self.console.print_line("❗ Nothing to undo!");
            return UndoOutcome::NothingToUndo;
        };

        self.console.print_line("⏪ Last action undone:");
        let status = last.undo();
        self.console.print_line(&status);
        tracing::debug!("Undid {} (history: {})", last.name(), self.history.len());
        UndoOutcome::Undone(status)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
