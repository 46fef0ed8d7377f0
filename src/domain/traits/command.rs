/// Command trait - a reversible action bound to one device
pub trait Command {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// Perform the action, returning the device's status line
    fn execute(&self) -> String;

    /// Reverse the action, returning the device's status line
    fn undo(&self) -> String;
}
