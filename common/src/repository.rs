use crate::employee::{Employee, EmployeeId};

/// Defines the contract for storing employee records.
///
/// Implementations keep insertion order; positions are what the listing
/// numbers refer to.
pub trait EmployeeRepository {
    /// All records, in insertion order.
    fn all(&self) -> &[Employee];

    /// Retrieves the first record whose id matches exactly.
    fn find(&self, id: &EmployeeId) -> Option<&Employee>;

    /// Appends a record to the end. Does not check for duplicates.
    fn push(&mut self, employee: Employee);

    /// Removes the first record whose id matches exactly.
    ///
    /// # Returns
    /// * `Some(Employee)` - The removed record.
    /// * `None` - If no record carries that id.
    fn remove(&mut self, id: &EmployeeId) -> Option<Employee>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
