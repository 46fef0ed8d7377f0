//! Console adapters: the real terminal and a scripted stand-in

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use crate::domain::traits::Console;

/// Terminal console: status lines to stdout, answers from stdin
#[derive(Debug, Default)]
pub struct ConsoleAdapter;

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Console for ConsoleAdapter {
    fn print_line(&self, line: &str) {
        println!("{}", line);
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        if let Err(e) = std::io::stdout().flush() {
            tracing::debug!("Failed to flush prompt: {}", e);
        }

        let mut input = String::new();
        match std::io::stdin().lock().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                tracing::warn!("Failed to read from stdin: {}", e);
                None
            }
        }
    }
}

/// Console that answers prompts from a fixed script and records every
/// line written to it. Used for `--answer` runs and in tests.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: RefCell<VecDeque<String>>,
    lines: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
    echo: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Also write lines and prompts to stdout
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Prompts shown so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.borrow().len()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
        self.prompts.borrow_mut().clear();
    }
}

impl Console for ScriptedConsole {
    fn print_line(&self, line: &str) {
        if self.echo {
            println!("{}", line);
        }
        self.lines.borrow_mut().push(line.to_string());
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        let answer = self.answers.borrow_mut().pop_front();
        if self.echo {
            println!("{}{}", prompt, answer.as_deref().unwrap_or(""));
        }
        answer.map(|a| a.trim().to_string())
    }
}
