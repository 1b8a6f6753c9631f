//! Service catalog model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a catalog service.
pub type ServiceId = Uuid;

/// Bookable service offered by employees (haircut, coloring, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
}

impl Service {
    /// Creates a service with a generated stable ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a service with a caller-provided stable ID.
    pub fn with_id(id: ServiceId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
