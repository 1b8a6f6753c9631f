//! Double-booking detection over half-open time intervals.
//!
//! # Responsibility
//! - Decide whether a candidate interval overlaps any existing appointment of
//!   the same employee.
//!
//! # Invariants
//! - Intervals are half-open `[start, end)`: an appointment ending exactly
//!   when another starts is not a conflict.
//! - Conflicts are scoped to one employee over full timestamps; calendar-day
//!   scoping is intentionally not part of the rule.
//! - Pure decision logic; the caller aborts the write and surfaces the
//!   conflict signal.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::model::appointment::{Appointment, AppointmentId};
use crate::model::employee::EmployeeId;

/// Half-open time interval `[start, end)` on the local calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns whether two half-open intervals overlap.
    ///
    /// `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && s2 < e1`; abutting
    /// intervals do not overlap. The test is symmetric.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the signed length of the interval.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Returns whether `candidate` double-books `employee_id`.
///
/// Compares the candidate against every appointment in `existing` that
/// belongs to the same employee, skipping `exclude` so that an appointment
/// being edited is never compared against its own prior interval.
///
/// An empty `existing` set never conflicts. `existing` may be pre-filtered to
/// the employee or contain all appointments; the employee predicate is
/// applied here either way.
///
/// # Panics
/// A candidate with `end <= start` is a caller bug (such input must be
/// rejected by duration validation first) and fails loudly rather than
/// returning a misleading answer.
pub fn has_conflict(
    candidate: TimeSlot,
    employee_id: EmployeeId,
    existing: &[Appointment],
    exclude: Option<AppointmentId>,
) -> bool {
    assert!(
        candidate.end > candidate.start,
        "conflict candidate must have positive duration"
    );

    existing
        .iter()
        .filter(|appointment| appointment.employee.id == employee_id)
        .filter(|appointment| exclude != Some(appointment.id))
        .any(|appointment| candidate.overlaps(&appointment.slot()))
}

#[cfg(test)]
mod tests {
    use super::{has_conflict, TimeSlot};
    use crate::model::appointment::Appointment;
    use crate::model::employee::Employee;
    use crate::model::service::Service;
    use chrono::{NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn slot(start_hour: u32, end_hour: u32) -> TimeSlot {
        TimeSlot::new(at(start_hour, 0), at(end_hour, 0))
    }

    fn booked(employee: &Employee, start_hour: u32, end_hour: u32) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            client_name: "Jane Doe".to_string(),
            start_time: at(start_hour, 0),
            end_time: at(end_hour, 0),
            employee: employee.clone(),
            services: vec![Service::new("Haircut")],
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (slot(9, 11), slot(10, 12)),
            (slot(9, 17), slot(10, 11)),
            (slot(9, 10), slot(10, 11)),
            (slot(9, 10), slot(14, 15)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn abutting_slots_do_not_overlap() {
        assert!(!slot(9, 10).overlaps(&slot(10, 11)));
        assert!(!slot(10, 11).overlaps(&slot(9, 10)));
        assert!(slot(9, 10).overlaps(&TimeSlot::new(at(9, 59), at(10, 30))));
    }

    #[test]
    fn empty_schedule_never_conflicts() {
        assert!(!has_conflict(slot(10, 11), Uuid::new_v4(), &[], None));
    }

    #[test]
    fn overlapping_same_employee_conflicts() {
        let employee = Employee::new("Alex");
        let existing = vec![booked(&employee, 10, 11)];

        assert!(has_conflict(
            TimeSlot::new(at(10, 30), at(11, 30)),
            employee.id,
            &existing,
            None
        ));
        // Abutment: starts exactly when the booked slot ends.
        assert!(!has_conflict(slot(11, 12), employee.id, &existing, None));
    }

    #[test]
    fn other_employees_schedules_are_ignored() {
        let busy = Employee::new("Alex");
        let free = Employee::new("Sam");
        let existing = vec![booked(&busy, 10, 11)];

        assert!(!has_conflict(
            TimeSlot::new(at(10, 30), at(11, 30)),
            free.id,
            &existing,
            None
        ));
    }

    #[test]
    fn excluded_appointment_is_not_compared_against_itself() {
        let employee = Employee::new("Alex");
        let own = booked(&employee, 10, 11);
        let own_id = own.id;
        let existing = vec![own];

        // Rescheduling within the same hour without exclusion would falsely
        // conflict with the prior interval.
        let moved = TimeSlot::new(at(10, 15), at(11, 15));
        assert!(has_conflict(moved, employee.id, &existing, None));
        assert!(!has_conflict(moved, employee.id, &existing, Some(own_id)));
    }

    #[test]
    #[should_panic(expected = "positive duration")]
    fn inverted_candidate_fails_loudly() {
        let _ = has_conflict(slot(11, 10), Uuid::new_v4(), &[], None);
    }
}
