//! Pure scheduling logic: field validation, conflict detection, day filtering.
//!
//! # Responsibility
//! - Decide whether a candidate appointment is well-formed.
//! - Decide whether a candidate interval double-books an employee.
//! - Project the appointment set onto a selected day/employee for display.
//!
//! # Invariants
//! - Every function here is a pure function of its inputs: no I/O, no shared
//!   mutable state, safe to call from any async context.
//! - The check-then-act seam (read existing appointments, then write) is NOT
//!   serialized here; storage implementations own that transaction boundary.

pub mod conflict;
pub mod filter;
pub mod validation;
