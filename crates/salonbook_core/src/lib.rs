//! Core domain logic for salonbook, a single-location appointment scheduler.
//! This crate is the single source of truth for scheduling invariants: no
//! employee may ever hold two overlapping appointments.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod scheduling;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::{Appointment, AppointmentId, NewAppointment};
pub use model::employee::{Employee, EmployeeId};
pub use model::service::{Service, ServiceId};
pub use repo::appointment_repo::{
    AppointmentRepository, BookingOutcome, SqliteAppointmentRepository,
};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::service_repo::{ServiceRepository, SqliteServiceRepository};
pub use repo::{RepoError, RepoResult};
pub use scheduling::conflict::{has_conflict, TimeSlot};
pub use scheduling::filter::{appointments_on, day_span};
pub use scheduling::validation::{
    is_valid_client_name, validate_duration, validate_new_appointment, BookingDraft,
    DurationError, ValidationError, MAX_APPOINTMENT_DURATION_HOURS,
};
pub use service::booking_service::{BookingError, BookingService};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
