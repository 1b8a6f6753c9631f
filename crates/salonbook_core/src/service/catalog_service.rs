//! Employee/service catalog use-case service.
//!
//! # Responsibility
//! - Provide catalog CRUD entry points for application shells: employees,
//!   services, and the services an employee offers.

use crate::model::employee::{Employee, EmployeeId};
use crate::model::service::{Service, ServiceId};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::service_repo::ServiceRepository;
use crate::repo::RepoResult;

/// Catalog facade over the employee and service repositories.
pub struct CatalogService<E: EmployeeRepository, S: ServiceRepository> {
    employees: E,
    services: S,
}

impl<E: EmployeeRepository, S: ServiceRepository> CatalogService<E, S> {
    pub fn new(employees: E, services: S) -> Self {
        Self {
            employees,
            services,
        }
    }

    /// Adds an employee offering the given services.
    pub fn add_employee(&self, name: &str, service_ids: &[ServiceId]) -> RepoResult<Employee> {
        self.employees.create_employee(name, service_ids)
    }

    pub fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.employees.get_employee(id)
    }

    pub fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        self.employees.list_employees()
    }

    /// Lists the services offered by one employee, used to populate the
    /// service picker once an employee is selected.
    pub fn services_for_employee(&self, id: EmployeeId) -> RepoResult<Vec<Service>> {
        self.employees.services_for(id)
    }

    pub fn remove_employee(&self, id: EmployeeId) -> RepoResult<()> {
        self.employees.delete_employee(id)
    }

    pub fn add_service(&self, title: &str) -> RepoResult<Service> {
        self.services.create_service(title)
    }

    pub fn get_service(&self, id: ServiceId) -> RepoResult<Option<Service>> {
        self.services.get_service(id)
    }

    /// Resolves the selected service IDs to catalog records.
    pub fn get_services(&self, ids: &[ServiceId]) -> RepoResult<Vec<Service>> {
        self.services.get_services(ids)
    }

    pub fn list_services(&self) -> RepoResult<Vec<Service>> {
        self.services.list_services()
    }

    pub fn remove_service(&self, id: ServiceId) -> RepoResult<()> {
        self.services.delete_service(id)
    }
}
