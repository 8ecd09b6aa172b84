use thiserror::Error;

use crate::employee::EmployeeId;

/// Everything that can go wrong while operating the roster.
///
/// None of these are fatal. The `Display` output is the exact line shown to
/// the user before the menu comes back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Invalid choice: {input}. Please enter a number from 1 to 4.")]
    InvalidMenuChoice { input: String },

    #[error("Error: Employee name and ID cannot be empty.")]
    EmptyField,

    #[error("Error: An employee with ID {id} already exists ({existing_name}).")]
    DuplicateId {
        id: EmployeeId,
        existing_name: String,
    },

    #[error("Error: Employee with ID {id} not found.")]
    NotFound { id: EmployeeId },
}
