//! # Employee Model
//!
//! An employee is a display name plus an identifier. Identifiers are compared
//! by exact string equality, so every `EmployeeId` is normalized on
//! construction: surrounding whitespace stripped, letters uppercased.

use std::fmt;

/// Normalized employee identifier (`" e101 "` becomes `"E101"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub id: EmployeeId,
}

impl Employee {
    pub fn new(name: &str, id: EmployeeId) -> Self {
        Self {
            name: name.trim().to_string(),
            id,
        }
    }
}
