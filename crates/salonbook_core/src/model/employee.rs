//! Employee catalog model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an employee.
pub type EmployeeId = Uuid;

/// Staff member clients can be booked with.
///
/// Identity is the `id`; `name` is display data. Employees exist
/// independently of appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}

impl Employee {
    /// Creates an employee with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an employee with a caller-provided stable ID.
    ///
    /// Used by storage read paths where identity already exists.
    pub fn with_id(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
