//! Employee repository.
//!
//! # Responsibility
//! - CRUD over the `employees` table and the `employee_services` offering
//!   relation.
//!
//! # Invariants
//! - Creating an employee with offered services is atomic: either the
//!   employee row and every offering row land, or nothing does.

use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

use crate::model::employee::{Employee, EmployeeId};
use crate::model::service::{Service, ServiceId};
use crate::repo::service_repo::parse_service_row;
use crate::repo::{parse_uuid, RepoError, RepoResult};

/// Repository interface for employees and their offered services.
pub trait EmployeeRepository {
    fn create_employee(&self, name: &str, service_ids: &[ServiceId]) -> RepoResult<Employee>;
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    /// Lists the services the employee offers, sorted by title.
    fn services_for(&self, id: EmployeeId) -> RepoResult<Vec<Service>>;
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, name: &str, service_ids: &[ServiceId]) -> RepoResult<Employee> {
        let employee = Employee::new(name);
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO employees (uuid, name) VALUES (?1, ?2);",
            params![employee.id.to_string(), employee.name.as_str()],
        )?;
        for service_id in service_ids {
            tx.execute(
                "INSERT INTO employee_services (employee_uuid, service_uuid)
                 VALUES (?1, ?2);",
                params![employee.id.to_string(), service_id.to_string()],
            )?;
        }

        tx.commit()?;
        Ok(employee)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        get_employee(self.conn, id)
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare("SELECT uuid, name FROM employees ORDER BY name ASC, uuid ASC;")?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }
        Ok(employees)
    }

    fn services_for(&self, id: EmployeeId) -> RepoResult<Vec<Service>> {
        if get_employee(self.conn, id)?.is_none() {
            return Err(RepoError::NotFound(id));
        }

        let mut stmt = self.conn.prepare(
            "SELECT s.uuid, s.title
             FROM services s
             JOIN employee_services es ON es.service_uuid = s.uuid
             WHERE es.employee_uuid = ?1
             ORDER BY s.title ASC, s.uuid ASC;",
        )?;
        let mut rows = stmt.query([id.to_string()])?;
        let mut services = Vec::new();
        while let Some(row) = rows.next()? {
            services.push(parse_service_row(row)?);
        }
        Ok(services)
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        // Appointments reference employees without cascade; deleting an
        // employee with booked appointments fails at the foreign key.
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE uuid = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

pub(crate) fn get_employee(conn: &Connection, id: EmployeeId) -> RepoResult<Option<Employee>> {
    let mut stmt = conn.prepare("SELECT uuid, name FROM employees WHERE uuid = ?1;")?;
    let mut rows = stmt.query([id.to_string()])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_employee_row(row)?));
    }
    Ok(None)
}

pub(crate) fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "employees.uuid")?;
    Ok(Employee {
        id,
        name: row.get("name")?,
    })
}
