//! # Roster Service
//!
//! The three roster operations with their rules applied. The session calls
//! these after collecting input; nothing here reads or prints anything.

use roster_common::employee::{Employee, EmployeeId};
use roster_common::error::RosterError;
use roster_common::repository::EmployeeRepository;
use tracing::{debug, info, warn};

use crate::roster::Roster;

pub struct RosterService {
    repo: Box<dyn EmployeeRepository + Send>,
}

impl RosterService {
    pub fn new(repo: Box<dyn EmployeeRepository + Send>) -> Self {
        Self { repo }
    }

    /// A service over the default two-person roster.
    pub fn seeded() -> Self {
        Self::new(Box::new(Roster::seeded()))
    }

    /// Adds an employee after checking both fields and the id's uniqueness.
    ///
    /// `name` is trimmed, `id` is trimmed and uppercased before any check.
    pub fn add(&mut self, name: &str, id: &str) -> Result<Employee, RosterError> {
        let name = name.trim();
        let id = EmployeeId::new(id);

        if name.is_empty() || id.is_empty() {
            warn!("rejected add with an empty field");
            return Err(RosterError::EmptyField);
        }

        if let Some(existing) = self.repo.find(&id) {
            warn!(%id, existing = %existing.name, "rejected add with a duplicate id");
            return Err(RosterError::DuplicateId {
                id,
                existing_name: existing.name.clone(),
            });
        }

        let employee = Employee::new(name, id);
        self.repo.push(employee.clone());
        info!(id = %employee.id, name = %employee.name, size = self.repo.len(), "employee added");
        Ok(employee)
    }

    pub fn list(&self) -> &[Employee] {
        debug!(size = self.repo.len(), "listing employees");
        self.repo.all()
    }

    /// Removes the first employee carrying `id` (trimmed and uppercased).
    pub fn remove(&mut self, id: &str) -> Result<Employee, RosterError> {
        let id = EmployeeId::new(id);

        match self.repo.remove(&id) {
            Some(employee) => {
                info!(%id, name = %employee.name, size = self.repo.len(), "employee removed");
                Ok(employee)
            }
            None => {
                warn!(%id, "no employee to remove");
                Err(RosterError::NotFound { id })
            }
        }
    }
}
