//! Appointment domain model.
//!
//! # Responsibility
//! - Define the hydrated appointment record read from storage and the
//!   candidate record submitted by booking flows.
//!
//! # Invariants
//! - `end_time > start_time` for every persisted appointment.
//! - `services` is non-empty when created through the validated path.
//! - The interval is half-open: `[start_time, end_time)`, so back-to-back
//!   appointments do not conflict.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::employee::{Employee, EmployeeId};
use crate::model::service::{Service, ServiceId};
use crate::scheduling::conflict::TimeSlot;

/// Stable identifier for an appointment.
pub type AppointmentId = Uuid;

/// Fully hydrated appointment as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_name: String,
    /// Local wall-clock instant; the system runs on one local calendar.
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub employee: Employee,
    pub services: Vec<Service>,
}

impl Appointment {
    /// Returns the booked interval as a half-open slot.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

/// Candidate appointment awaiting validation and conflict checking.
///
/// Carries references by ID only; hydration happens after persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub client_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub employee_id: EmployeeId,
    pub service_ids: Vec<ServiceId>,
}

impl NewAppointment {
    /// Returns the candidate interval as a half-open slot.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}
