//! Smoke CLI for the scheduling core.
//!
//! # Responsibility
//! - Exercise the full booking flow end to end against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use salonbook_core::db::open_db_in_memory;
use salonbook_core::{
    BookingOutcome, BookingService, CatalogService, NewAppointment, SqliteAppointmentRepository,
    SqliteEmployeeRepository, SqliteServiceRepository,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("salonbook smoke failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("salonbook_core version={}", salonbook_core::core_version());

    let conn = open_db_in_memory()?;
    let catalog = CatalogService::new(
        SqliteEmployeeRepository::new(&conn),
        SqliteServiceRepository::new(&conn),
    );
    let booking = BookingService::new(SqliteAppointmentRepository::new(&conn));

    let haircut = catalog.add_service("Haircut")?;
    let alex = catalog.add_employee("Alex", &[haircut.id])?;

    let day = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    let slot = |h: u32, m: u32| day.and_hms_opt(h, m, 0).expect("valid time");

    let first = booking.create_appointment(&NewAppointment {
        client_name: "Jane Doe".to_string(),
        start_time: slot(10, 0),
        end_time: slot(11, 0),
        employee_id: alex.id,
        service_ids: vec![haircut.id],
    })?;
    println!("first booking: {}", describe(first));

    // Overlaps 10:00-11:00 for the same employee and must be rejected.
    let double = booking.create_appointment(&NewAppointment {
        client_name: "John Roe".to_string(),
        start_time: slot(10, 30),
        end_time: slot(11, 30),
        employee_id: alex.id,
        service_ids: vec![haircut.id],
    })?;
    println!("overlapping booking: {}", describe(double));

    println!("schedule for {day}:");
    for appointment in booking.appointments_on(day, None)? {
        let services: Vec<&str> = appointment
            .services
            .iter()
            .map(|service| service.title.as_str())
            .collect();
        println!(
            "  {} | {}-{} | {} | {}",
            appointment.employee.name,
            appointment.start_time.format("%H:%M"),
            appointment.end_time.format("%H:%M"),
            appointment.client_name,
            services.join(", ")
        );
    }

    Ok(())
}

fn describe(outcome: BookingOutcome) -> &'static str {
    match outcome {
        BookingOutcome::Booked(_) => "booked",
        BookingOutcome::Conflict => "conflict, employee already booked",
    }
}
