//! # Roster Session
//!
//! Drives the menu loop as an explicit state machine. Each call to
//! [`Session::step`] performs one transition, which reads at most one line of
//! input, so there is never more than one prompt outstanding.
//!
//! ```text
//! MenuDisplay -> AwaitingChoice -+-> AddName -> AddId -+-> MenuDisplay
//!      ^                         +-> Listing ----------+
//!      |                         +-> RemoveId ---------+
//!      +---- invalid choice -----+-> Exited
//! ```
//!
//! End of input at any prompt also leads to `Exited`, abandoning whatever
//! operation was half entered.

use roster_common::console::Console;
use roster_common::employee::Employee;
use roster_common::error::RosterError;
use tracing::debug;

use crate::menu::MenuChoice;
use crate::service::RosterService;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const NAME_PROMPT: &str = "Enter employee name: ";
pub const ID_PROMPT: &str = "Enter employee ID: ";
pub const REMOVE_PROMPT: &str = "Enter employee ID to remove: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    MenuDisplay,
    AwaitingChoice,
    /// Waiting for the new employee's name.
    AddName,
    /// Waiting for the new employee's id; `name` is already trimmed.
    AddId { name: String },
    RemoveId,
    Listing,
    Exited,
}

pub struct Session<C: Console> {
    service: RosterService,
    console: C,
    state: SessionState,
}

impl<C: Console> Session<C> {
    pub fn new(service: RosterService, console: C) -> Self {
        Self {
            service,
            console,
            state: SessionState::MenuDisplay,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Exited
    }

    pub fn employees(&self) -> &[Employee] {
        self.service.list()
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs transitions until the session has exited.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while !self.is_finished() {
            self.step().await?;
        }
        debug!("session finished");
        Ok(())
    }

    /// Performs a single transition.
    pub async fn step(&mut self) -> anyhow::Result<()> {
        let current = std::mem::replace(&mut self.state, SessionState::Exited);

        let next = match current {
            SessionState::MenuDisplay => {
                self.console.show_menu().await?;
                SessionState::AwaitingChoice
            }
            SessionState::AwaitingChoice => match self.read(CHOICE_PROMPT).await? {
                None => SessionState::Exited,
                Some(line) => self.dispatch(&line).await?,
            },
            SessionState::AddName => match self.read(NAME_PROMPT).await? {
                None => SessionState::Exited,
                Some(name) => SessionState::AddId {
                    name: name.trim().to_string(),
                },
            },
            SessionState::AddId { name } => match self.read(ID_PROMPT).await? {
                None => SessionState::Exited,
                Some(id) => {
                    let outcome = self.service.add(&name, &id);
                    self.report(outcome, "added").await?;
                    SessionState::MenuDisplay
                }
            },
            SessionState::Listing => {
                self.console.show_employees(self.service.list()).await?;
                SessionState::MenuDisplay
            }
            SessionState::RemoveId => match self.read(REMOVE_PROMPT).await? {
                None => SessionState::Exited,
                Some(id) => {
                    let outcome = self.service.remove(&id);
                    self.report(outcome, "removed").await?;
                    SessionState::MenuDisplay
                }
            },
            SessionState::Exited => SessionState::Exited,
        };

        debug!(state = ?next, "session transition");
        self.state = next;
        Ok(())
    }

    async fn dispatch(&mut self, line: &str) -> anyhow::Result<SessionState> {
        let next = match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => SessionState::AddName,
            Ok(MenuChoice::List) => SessionState::Listing,
            Ok(MenuChoice::Remove) => SessionState::RemoveId,
            Ok(MenuChoice::Exit) => {
                self.console.farewell().await?;
                SessionState::Exited
            }
            Err(err) => {
                self.console.show_error(&err).await?;
                SessionState::MenuDisplay
            }
        };
        Ok(next)
    }

    async fn read(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        let line = self.console.prompt(label).await?;
        if line.is_none() {
            debug!(prompt = label.trim_end(), "input ended");
        }
        Ok(line)
    }

    async fn report(
        &mut self,
        outcome: Result<Employee, RosterError>,
        verb: &str,
    ) -> anyhow::Result<()> {
        match outcome {
            Ok(employee) => {
                let message = format!(
                    "Employee {} (ID: {}) {verb} successfully.",
                    employee.name, employee.id
                );
                self.console.show_success(&message).await
            }
            Err(err) => self.console.show_error(&err).await,
        }
    }
}
