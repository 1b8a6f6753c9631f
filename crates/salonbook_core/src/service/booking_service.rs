//! Appointment booking use-case service.
//!
//! # Responsibility
//! - Drive the create/update flow: draft gate -> conflict-checked write.
//! - Expose the day/employee schedule view and a standalone conflict probe.
//!
//! # Invariants
//! - A conflict is a normal [`BookingOutcome::Conflict`] value handed back to
//!   the caller, never an error and never a broadcast.
//! - Storage failures propagate unchanged; this layer never retries.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::appointment::{Appointment, AppointmentId, NewAppointment};
use crate::model::employee::EmployeeId;
use crate::repo::appointment_repo::{AppointmentRepository, BookingOutcome};
use crate::repo::{RepoError, RepoResult};
use crate::scheduling::conflict::{has_conflict, TimeSlot};
use crate::scheduling::filter::appointments_on;
use crate::scheduling::validation::BookingDraft;

/// Service error for booking use-cases.
#[derive(Debug)]
pub enum BookingError {
    /// Draft failed the composite field gate; the caller re-prompts.
    IncompleteDraft,
    /// Target appointment does not exist.
    AppointmentNotFound(AppointmentId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteDraft => write!(f, "booking draft has missing or invalid fields"),
            Self::AppointmentNotFound(id) => write!(f, "appointment not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for BookingError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Booking facade over an appointment repository.
pub struct BookingService<R: AppointmentRepository> {
    repo: R,
}

impl<R: AppointmentRepository> BookingService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Books a new appointment from completed form state.
    ///
    /// Returns [`BookingError::IncompleteDraft`] when the draft fails the
    /// field gate; otherwise delegates to the conflict-checked write path.
    pub fn create_from_draft(&self, draft: &BookingDraft) -> Result<BookingOutcome, BookingError> {
        let candidate = draft
            .to_new_appointment()
            .ok_or(BookingError::IncompleteDraft)?;
        Ok(self.repo.create_appointment(&candidate)?)
    }

    /// Books a validated candidate appointment.
    pub fn create_appointment(
        &self,
        candidate: &NewAppointment,
    ) -> Result<BookingOutcome, BookingError> {
        Ok(self.repo.create_appointment(candidate)?)
    }

    /// Reschedules or reassigns an existing appointment.
    ///
    /// The appointment's own prior interval is excluded from the conflict
    /// comparison, so editing only the client name or services never reports
    /// a self-conflict.
    pub fn update_appointment(
        &self,
        id: AppointmentId,
        candidate: &NewAppointment,
    ) -> Result<BookingOutcome, BookingError> {
        match self.repo.update_appointment(id, candidate) {
            Err(RepoError::NotFound(missing)) if missing == id => {
                Err(BookingError::AppointmentNotFound(id))
            }
            other => Ok(other?),
        }
    }

    /// Probes whether a slot would double-book the employee.
    ///
    /// Pure read + decision; the authoritative check still runs inside the
    /// write transaction.
    pub fn check_conflict(
        &self,
        employee_id: EmployeeId,
        slot: TimeSlot,
        exclude: Option<AppointmentId>,
    ) -> RepoResult<bool> {
        let schedule = self.repo.list_for_employee(employee_id)?;
        Ok(has_conflict(slot, employee_id, &schedule, exclude))
    }

    /// Returns the schedule view for one day and an optional employee.
    pub fn appointments_on(
        &self,
        selected_date: NaiveDate,
        selected_employee: Option<EmployeeId>,
    ) -> RepoResult<Vec<Appointment>> {
        let all = self.repo.list_appointments()?;
        Ok(appointments_on(&all, selected_date, selected_employee))
    }

    /// Gets one appointment by stable ID.
    pub fn get_appointment(&self, id: AppointmentId) -> RepoResult<Option<Appointment>> {
        self.repo.get_appointment(id)
    }

    /// Lists every appointment, soonest first.
    pub fn list_appointments(&self) -> RepoResult<Vec<Appointment>> {
        self.repo.list_appointments()
    }

    /// Deletes an appointment; it no longer participates in conflict checks.
    pub fn delete_appointment(&self, id: AppointmentId) -> RepoResult<()> {
        self.repo.delete_appointment(id)
    }
}
