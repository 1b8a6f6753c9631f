//! Day/employee projection of the appointment collection.
//!
//! # Responsibility
//! - Reduce the full appointment set to the subset a schedule view shows for
//!   one calendar day and an optional employee selection.
//!
//! # Invariants
//! - Day matching is an interval-overlap test against the 24-hour span of
//!   the selected day, so boundary-spanning appointments appear on both days
//!   they touch.
//! - Input order is preserved; the input is never mutated.

use chrono::{NaiveDate, TimeDelta};

use crate::model::appointment::Appointment;
use crate::model::employee::EmployeeId;
use crate::scheduling::conflict::TimeSlot;

/// Returns the 24-hour span of `date`: local midnight to the next midnight.
pub fn day_span(date: NaiveDate) -> TimeSlot {
    let start = date.and_hms_opt(0, 0, 0).expect("midnight is a valid time");
    TimeSlot::new(start, start + TimeDelta::days(1))
}

/// Filters `all` down to appointments visible on `selected_date` for the
/// optional `selected_employee`.
///
/// An appointment is visible when its interval touches the selected day
/// (`start_time < start of next day` and `end_time >= start of day`) and
/// either no employee is selected or the appointment belongs to the selected
/// employee. Both conditions must hold.
pub fn appointments_on(
    all: &[Appointment],
    selected_date: NaiveDate,
    selected_employee: Option<EmployeeId>,
) -> Vec<Appointment> {
    let span = day_span(selected_date);
    all.iter()
        .filter(|appointment| {
            appointment.start_time < span.end && appointment.end_time >= span.start
        })
        .filter(|appointment| {
            selected_employee.map_or(true, |id| appointment.employee.id == id)
        })
        .cloned()
        .collect()
}
