//! Appointment repository: persistence plus the conflict-checked write path.
//!
//! # Responsibility
//! - CRUD over `appointments` and the `appointment_services` relation.
//! - Run validate -> conflict-check -> write as one immediate transaction,
//!   so two concurrent bookings cannot both pass the check against a stale
//!   snapshot.
//!
//! # Invariants
//! - Write paths call `validate_new_appointment` before any SQL mutation.
//! - A conflicting candidate is a normal [`BookingOutcome::Conflict`]
//!   outcome, never an error, and leaves storage untouched.
//! - Read paths reject rows with inverted intervals or unparseable IDs.

use chrono::{DateTime, NaiveDateTime};
use log::{info, warn};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use uuid::Uuid;

use crate::model::appointment::{Appointment, AppointmentId, NewAppointment};
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::get_employee;
use crate::repo::service_repo::parse_service_row;
use crate::repo::{parse_uuid, RepoError, RepoResult};
use crate::scheduling::conflict::has_conflict;
use crate::scheduling::validation::validate_new_appointment;

const APPOINTMENT_SELECT_SQL: &str = "SELECT
    a.uuid,
    a.client_name,
    a.start_time,
    a.end_time,
    e.uuid AS employee_uuid,
    e.name AS employee_name
FROM appointments a
JOIN employees e ON e.uuid = a.employee_uuid";

/// Decision returned by conflict-checked write paths.
///
/// `Conflict` is the in-process signal callers surface to the user; it
/// replaces a broadcast notification with a value handed directly back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The appointment was persisted.
    Booked(AppointmentId),
    /// The employee is already booked in an overlapping slot; nothing was
    /// written.
    Conflict,
}

/// Repository interface for appointment persistence.
///
/// One stable contract; the conflict rule is employee-scoped half-open
/// interval overlap over full timestamps.
pub trait AppointmentRepository {
    /// Validates, conflict-checks and persists a candidate appointment.
    fn create_appointment(&self, candidate: &NewAppointment) -> RepoResult<BookingOutcome>;
    /// Same as create, but for an existing appointment; its own prior
    /// interval is excluded from the conflict comparison.
    fn update_appointment(
        &self,
        id: AppointmentId,
        candidate: &NewAppointment,
    ) -> RepoResult<BookingOutcome>;
    fn get_appointment(&self, id: AppointmentId) -> RepoResult<Option<Appointment>>;
    fn list_appointments(&self) -> RepoResult<Vec<Appointment>>;
    fn list_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<Appointment>>;
    fn delete_appointment(&self, id: AppointmentId) -> RepoResult<()>;
}

/// SQLite-backed appointment repository.
pub struct SqliteAppointmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAppointmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Shared conflict-checked write path for create and update.
    ///
    /// The immediate transaction is the serialization point: the read of the
    /// employee's schedule and the subsequent write commit together or not at
    /// all.
    fn write_checked(
        &self,
        candidate: &NewAppointment,
        existing_id: Option<AppointmentId>,
    ) -> RepoResult<BookingOutcome> {
        validate_new_appointment(candidate)?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        if get_employee(&tx, candidate.employee_id)?.is_none() {
            return Err(RepoError::NotFound(candidate.employee_id));
        }
        if let Some(id) = existing_id {
            if load_appointment(&tx, id)?.is_none() {
                return Err(RepoError::NotFound(id));
            }
        }

        let schedule = load_for_employee(&tx, candidate.employee_id)?;
        if has_conflict(candidate.slot(), candidate.employee_id, &schedule, existing_id) {
            warn!(
                "event=booking_conflict module=repo status=rejected employee={}",
                candidate.employee_id
            );
            return Ok(BookingOutcome::Conflict);
        }

        let id = match existing_id {
            Some(id) => {
                update_row(&tx, id, candidate)?;
                id
            }
            None => insert_row(&tx, candidate)?,
        };
        tx.commit()?;

        info!(
            "event=booking_written module=repo status=ok appointment={id} employee={}",
            candidate.employee_id
        );
        Ok(BookingOutcome::Booked(id))
    }
}

impl AppointmentRepository for SqliteAppointmentRepository<'_> {
    fn create_appointment(&self, candidate: &NewAppointment) -> RepoResult<BookingOutcome> {
        self.write_checked(candidate, None)
    }

    fn update_appointment(
        &self,
        id: AppointmentId,
        candidate: &NewAppointment,
    ) -> RepoResult<BookingOutcome> {
        self.write_checked(candidate, Some(id))
    }

    fn get_appointment(&self, id: AppointmentId) -> RepoResult<Option<Appointment>> {
        load_appointment(self.conn, id)
    }

    fn list_appointments(&self) -> RepoResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{APPOINTMENT_SELECT_SQL} ORDER BY a.start_time ASC, a.uuid ASC;"
        ))?;
        let mut rows = stmt.query([])?;
        collect_appointments(self.conn, &mut rows)
    }

    fn list_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{APPOINTMENT_SELECT_SQL}
             WHERE a.employee_uuid = ?1
             ORDER BY a.start_time ASC, a.uuid ASC;"
        ))?;
        let mut rows = stmt.query([employee_id.to_string()])?;
        collect_appointments(self.conn, &mut rows)
    }

    fn delete_appointment(&self, id: AppointmentId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM appointments WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn insert_row(conn: &Connection, candidate: &NewAppointment) -> RepoResult<AppointmentId> {
    let id = Uuid::new_v4();
    conn.execute(
        "INSERT INTO appointments (uuid, client_name, start_time, end_time, employee_uuid)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        params![
            id.to_string(),
            candidate.client_name.as_str(),
            to_epoch_ms(candidate.start_time),
            to_epoch_ms(candidate.end_time),
            candidate.employee_id.to_string(),
        ],
    )?;
    replace_service_links(conn, id, candidate)?;
    Ok(id)
}

fn update_row(conn: &Connection, id: AppointmentId, candidate: &NewAppointment) -> RepoResult<()> {
    conn.execute(
        "UPDATE appointments
         SET
            client_name = ?1,
            start_time = ?2,
            end_time = ?3,
            employee_uuid = ?4,
            updated_at = (strftime('%s', 'now') * 1000)
         WHERE uuid = ?5;",
        params![
            candidate.client_name.as_str(),
            to_epoch_ms(candidate.start_time),
            to_epoch_ms(candidate.end_time),
            candidate.employee_id.to_string(),
            id.to_string(),
        ],
    )?;
    conn.execute(
        "DELETE FROM appointment_services WHERE appointment_uuid = ?1;",
        [id.to_string()],
    )?;
    replace_service_links(conn, id, candidate)?;
    Ok(())
}

fn replace_service_links(
    conn: &Connection,
    id: AppointmentId,
    candidate: &NewAppointment,
) -> RepoResult<()> {
    for service_id in &candidate.service_ids {
        conn.execute(
            "INSERT INTO appointment_services (appointment_uuid, service_uuid)
             VALUES (?1, ?2);",
            params![id.to_string(), service_id.to_string()],
        )?;
    }
    Ok(())
}

fn load_appointment(conn: &Connection, id: AppointmentId) -> RepoResult<Option<Appointment>> {
    let mut stmt = conn.prepare(&format!("{APPOINTMENT_SELECT_SQL} WHERE a.uuid = ?1;"))?;
    let mut rows = stmt.query([id.to_string()])?;
    if let Some(row) = rows.next()? {
        let appointment = hydrate(conn, row)?;
        return Ok(Some(appointment));
    }
    Ok(None)
}

fn load_for_employee(conn: &Connection, employee_id: EmployeeId) -> RepoResult<Vec<Appointment>> {
    let mut stmt = conn.prepare(&format!(
        "{APPOINTMENT_SELECT_SQL}
         WHERE a.employee_uuid = ?1
         ORDER BY a.start_time ASC, a.uuid ASC;"
    ))?;
    let mut rows = stmt.query([employee_id.to_string()])?;
    collect_appointments(conn, &mut rows)
}

fn collect_appointments(
    conn: &Connection,
    rows: &mut rusqlite::Rows<'_>,
) -> RepoResult<Vec<Appointment>> {
    let mut appointments = Vec::new();
    while let Some(row) = rows.next()? {
        appointments.push(hydrate(conn, row)?);
    }
    Ok(appointments)
}

fn hydrate(conn: &Connection, row: &Row<'_>) -> RepoResult<Appointment> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid(&uuid_text, "appointments.uuid")?;

    let employee_uuid: String = row.get("employee_uuid")?;
    let employee_id = parse_uuid(&employee_uuid, "appointments.employee_uuid")?;

    let start_time = from_epoch_ms(row.get("start_time")?, "appointments.start_time")?;
    let end_time = from_epoch_ms(row.get("end_time")?, "appointments.end_time")?;
    if end_time <= start_time {
        return Err(RepoError::InvalidData(format!(
            "appointment {id} has non-positive duration"
        )));
    }

    let mut stmt = conn.prepare(
        "SELECT s.uuid, s.title
         FROM services s
         JOIN appointment_services links ON links.service_uuid = s.uuid
         WHERE links.appointment_uuid = ?1
         ORDER BY s.title ASC, s.uuid ASC;",
    )?;
    let mut service_rows = stmt.query([id.to_string()])?;
    let mut services = Vec::new();
    while let Some(service_row) = service_rows.next()? {
        services.push(parse_service_row(service_row)?);
    }

    Ok(Appointment {
        id,
        client_name: row.get("client_name")?,
        start_time,
        end_time,
        employee: Employee {
            id: employee_id,
            name: row.get("employee_name")?,
        },
        services,
    })
}

fn to_epoch_ms(instant: NaiveDateTime) -> i64 {
    instant.and_utc().timestamp_millis()
}

fn from_epoch_ms(ms: i64, column: &str) -> RepoResult<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms)
        .map(|instant| instant.naive_utc())
        .ok_or_else(|| RepoError::InvalidData(format!("timestamp `{ms}` out of range in {column}")))
}
