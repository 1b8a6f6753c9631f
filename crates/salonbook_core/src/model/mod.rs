//! Domain records for the scheduling core.
//!
//! # Responsibility
//! - Define the employee/service catalog and appointment records shared by
//!   validation, conflict checking and persistence.
//!
//! # Invariants
//! - Every record is identified by a stable UUID; names/titles are display
//!   data only.
//! - A persisted appointment always references one employee and at least one
//!   service, and its interval has positive duration.

pub mod appointment;
pub mod employee;
pub mod service;
