use std::str::FromStr;

use roster_common::error::RosterError;

/// The four entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Remove,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 4] = [Self::Add, Self::List, Self::Remove, Self::Exit];

    pub fn key(self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::List => "2",
            Self::Remove => "3",
            Self::Exit => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Employee",
            Self::List => "List Employees",
            Self::Remove => "Remove Employee",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = RosterError;

    /// Parses a menu selection.
    ///
    /// Surrounding whitespace is ignored; anything other than the literal
    /// keys `1` to `4` is an invalid choice, reported with the trimmed input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == input)
            .ok_or_else(|| RosterError::InvalidMenuChoice {
                input: input.to_string(),
            })
    }
}
