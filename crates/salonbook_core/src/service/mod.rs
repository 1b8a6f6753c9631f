//! Use-case facades consumed by application shells.
//!
//! # Responsibility
//! - Orchestrate validation, conflict checking and persistence behind small
//!   call surfaces (`BookingService`, `CatalogService`).
//!
//! # Invariants
//! - Facades never bypass repository validation/persistence contracts.
//! - Facades remain storage-agnostic; they depend on repository traits only.

pub mod booking_service;
pub mod catalog_service;
