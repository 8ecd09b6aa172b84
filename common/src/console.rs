use crate::employee::Employee;
use crate::error::RosterError;

/// Everything the session needs from the person at the keyboard.
///
/// The session decides *what* is said and in which order; implementations
/// decide how it looks. Only one prompt is ever outstanding.
#[async_trait::async_trait]
pub trait Console: Send {
    async fn show_menu(&mut self) -> anyhow::Result<()>;

    /// Issues `label` and waits for one line of input.
    ///
    /// Returns the line without its terminator, or `None` once input has ended.
    async fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>>;

    async fn show_employees(&mut self, employees: &[Employee]) -> anyhow::Result<()>;

    async fn show_success(&mut self, message: &str) -> anyhow::Result<()>;

    async fn show_error(&mut self, err: &RosterError) -> anyhow::Result<()>;

    async fn farewell(&mut self) -> anyhow::Result<()>;
}
