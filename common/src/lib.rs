//! # Roster Common
//!
//! Shared types for the roster workspace.
//!
//! * **[`employee`]**: The `Employee` record and its normalized `EmployeeId`.
//! * **[`error`]**: The recoverable, user-facing error taxonomy.
//! * **[`config`]**: Runtime presentation settings.
//! * **[`repository`]** and **[`console`]**: Traits the core logic is written against.

pub mod config;
pub mod console;
pub mod employee;
pub mod error;
pub mod repository;
