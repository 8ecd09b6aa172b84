use roster_common::employee::{Employee, EmployeeId};
use roster_common::repository::EmployeeRepository;

/// The records every session starts with.
const SEED: &[(&str, &str)] = &[("Alice", "E101"), ("Bob", "E102")];

/// In-memory, insertion-ordered employee store.
///
/// Lookups are linear scans in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let employees = SEED
            .iter()
            .map(|(name, id)| Employee::new(name, EmployeeId::new(id)))
            .collect();
        Self { employees }
    }
}

impl EmployeeRepository for Roster {
    fn all(&self) -> &[Employee] {
        &self.employees
    }

    fn find(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    fn push(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    fn remove(&mut self, id: &EmployeeId) -> Option<Employee> {
        let idx = self.employees.iter().position(|employee| &employee.id == id)?;
        Some(self.employees.remove(idx))
    }
}
