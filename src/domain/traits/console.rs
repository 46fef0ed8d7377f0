use crate::application::errors::InputError;

/// Console trait - abstraction over the terminal the demos talk to
///
/// Every status line a demo produces goes through `print_line`, and every
/// interactive answer comes from `read_line`, so demos run the same against
/// a real terminal or a scripted one.
pub trait Console {
    /// Write one status line
    fn print_line(&self, line: &str);

    /// Show a prompt and read one line of input, trimmed.
    /// Returns `None` once input is closed.
    fn read_line(&self, prompt: &str) -> Option<String>;

    /// Read one numeric token. Negative numbers are well-formed.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Closed` when input ends and
    /// `InputError::NotANumber` when the token does not parse.
    fn read_number(&self, prompt: &str) -> Result<i64, InputError> {
        let line = self.read_line(prompt).ok_or(InputError::Closed)?;
        let token = line.split_whitespace().next().unwrap_or("");
        token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    }
}
