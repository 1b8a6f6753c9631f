//! Candidate appointment validation.
//!
//! # Responsibility
//! - Validate client name, time range and field completeness before any
//!   storage call is issued.
//!
//! # Invariants
//! - Stateless; independent of persisted data.
//! - Expected bad input is a typed result, never a panic.

use chrono::{NaiveDateTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::appointment::NewAppointment;
use crate::model::employee::EmployeeId;
use crate::model::service::ServiceId;

/// Longest bookable appointment, in hours.
///
/// The executable behavior of the app has always been five hours; treat this
/// constant as authoritative.
pub const MAX_APPOINTMENT_DURATION_HOURS: i64 = 5;

static CLIENT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid client name regex"));

/// Returns the maximum allowed appointment duration.
pub fn max_appointment_duration() -> TimeDelta {
    TimeDelta::hours(MAX_APPOINTMENT_DURATION_HOURS)
}

/// Typed failure for time-range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationError {
    /// `end <= start`: the interval is empty or inverted.
    NonPositive,
    /// The interval exceeds [`max_appointment_duration`].
    TooLong,
}

impl Display for DurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive => write!(f, "appointment duration must be greater than zero"),
            Self::TooLong => write!(
                f,
                "appointment duration must not exceed {MAX_APPOINTMENT_DURATION_HOURS} hours"
            ),
        }
    }
}

impl Error for DurationError {}

/// Typed failure for whole-candidate validation on write paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Client name is empty or contains characters other than letters/spaces.
    InvalidClientName,
    /// No service was selected for the appointment.
    NoServicesSelected,
    /// Time range failed duration validation.
    Duration(DurationError),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClientName => {
                write!(f, "client name must contain letters and spaces only")
            }
            Self::NoServicesSelected => write!(f, "at least one service must be selected"),
            Self::Duration(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Duration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DurationError> for ValidationError {
    fn from(value: DurationError) -> Self {
        Self::Duration(value)
    }
}

/// Returns whether `name` is a valid client name.
///
/// Valid means non-empty and consisting of ASCII letters and spaces only; no
/// digits, no punctuation.
pub fn is_valid_client_name(name: &str) -> bool {
    CLIENT_NAME_RE.is_match(name)
}

/// Validates that `[start, end)` is a bookable time range.
///
/// Fails with [`DurationError::NonPositive`] when `end <= start` and with
/// [`DurationError::TooLong`] when the range exceeds the configured maximum.
/// Exactly the maximum duration is allowed.
pub fn validate_duration(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), DurationError> {
    if end <= start {
        return Err(DurationError::NonPositive);
    }
    if end - start > max_appointment_duration() {
        return Err(DurationError::TooLong);
    }
    Ok(())
}

/// Validates a complete candidate before persistence is attempted.
///
/// Write paths must call this before any SQL mutation.
pub fn validate_new_appointment(candidate: &NewAppointment) -> Result<(), ValidationError> {
    if !is_valid_client_name(&candidate.client_name) {
        return Err(ValidationError::InvalidClientName);
    }
    if candidate.service_ids.is_empty() {
        return Err(ValidationError::NoServicesSelected);
    }
    validate_duration(candidate.start_time, candidate.end_time)?;
    Ok(())
}

/// In-progress booking form state, as collected by a UI.
///
/// All fields are optional or possibly empty until the user finishes the
/// form; [`BookingDraft::validate_all_fields`] is the composite gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub client_name: String,
    pub employee_id: Option<EmployeeId>,
    pub service_ids: Vec<ServiceId>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl BookingDraft {
    /// Composite validation gate over every draft field.
    ///
    /// True iff the client name is present and valid, an employee is
    /// selected, at least one service is selected, both instants are present,
    /// and the time range passes duration validation. Short-circuits on the
    /// first failing condition.
    pub fn validate_all_fields(&self) -> bool {
        if !is_valid_client_name(&self.client_name) {
            return false;
        }
        if self.employee_id.is_none() {
            return false;
        }
        if self.service_ids.is_empty() {
            return false;
        }
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return false;
        };
        if end <= start {
            return false;
        }
        validate_duration(start, end).is_ok()
    }

    /// Converts a fully valid draft into a persistable candidate.
    ///
    /// Returns `None` when any field is missing or invalid.
    pub fn to_new_appointment(&self) -> Option<NewAppointment> {
        if !self.validate_all_fields() {
            return None;
        }
        Some(NewAppointment {
            client_name: self.client_name.clone(),
            start_time: self.start_time?,
            end_time: self.end_time?,
            employee_id: self.employee_id?,
            service_ids: self.service_ids.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{
        is_valid_client_name, validate_duration, validate_new_appointment, BookingDraft,
        DurationError, ValidationError,
    };
    use crate::model::appointment::NewAppointment;
    use chrono::{NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn client_name_accepts_letters_and_spaces() {
        assert!(is_valid_client_name("Jane Doe"));
        assert!(is_valid_client_name("a"));
        assert!(is_valid_client_name("ANNA MARIA LOPEZ"));
    }

    #[test]
    fn client_name_rejects_empty_digits_and_symbols() {
        assert!(!is_valid_client_name(""));
        assert!(!is_valid_client_name("Jane3"));
        assert!(!is_valid_client_name("Jane-Doe"));
        assert!(!is_valid_client_name("O'Brien"));
        assert!(!is_valid_client_name("  \t"));
    }

    #[test]
    fn duration_rejects_empty_and_inverted_ranges() {
        assert_eq!(
            validate_duration(at(10, 0), at(10, 0)),
            Err(DurationError::NonPositive)
        );
        assert_eq!(
            validate_duration(at(11, 0), at(10, 0)),
            Err(DurationError::NonPositive)
        );
    }

    #[test]
    fn duration_boundary_is_inclusive_at_five_hours() {
        assert_eq!(validate_duration(at(10, 0), at(15, 0)), Ok(()));
        assert_eq!(
            validate_duration(at(10, 0), at(15, 1)),
            Err(DurationError::TooLong)
        );
    }

    #[test]
    fn new_appointment_validation_reports_first_failure() {
        let candidate = NewAppointment {
            client_name: "Jane Doe".to_string(),
            start_time: at(10, 0),
            end_time: at(11, 0),
            employee_id: Uuid::new_v4(),
            service_ids: vec![Uuid::new_v4()],
        };
        assert_eq!(validate_new_appointment(&candidate), Ok(()));

        let bad_name = NewAppointment {
            client_name: "Jane 3rd".to_string(),
            ..candidate.clone()
        };
        assert_eq!(
            validate_new_appointment(&bad_name),
            Err(ValidationError::InvalidClientName)
        );

        let no_services = NewAppointment {
            service_ids: vec![],
            ..candidate.clone()
        };
        assert_eq!(
            validate_new_appointment(&no_services),
            Err(ValidationError::NoServicesSelected)
        );

        let inverted = NewAppointment {
            start_time: at(11, 0),
            end_time: at(10, 0),
            ..candidate
        };
        assert_eq!(
            validate_new_appointment(&inverted),
            Err(ValidationError::Duration(DurationError::NonPositive))
        );
    }

    #[test]
    fn draft_gate_requires_every_field() {
        let complete = BookingDraft {
            client_name: "Jane Doe".to_string(),
            employee_id: Some(Uuid::new_v4()),
            service_ids: vec![Uuid::new_v4()],
            start_time: Some(at(10, 0)),
            end_time: Some(at(11, 0)),
        };
        assert!(complete.validate_all_fields());

        assert!(!BookingDraft {
            service_ids: vec![],
            ..complete.clone()
        }
        .validate_all_fields());
        assert!(!BookingDraft {
            employee_id: None,
            ..complete.clone()
        }
        .validate_all_fields());
        assert!(!BookingDraft {
            end_time: None,
            ..complete.clone()
        }
        .validate_all_fields());
        assert!(!BookingDraft {
            client_name: String::new(),
            ..complete
        }
        .validate_all_fields());
    }

    #[test]
    fn valid_draft_converts_to_candidate() {
        let draft = BookingDraft {
            client_name: "Jane Doe".to_string(),
            employee_id: Some(Uuid::new_v4()),
            service_ids: vec![Uuid::new_v4()],
            start_time: Some(at(10, 0)),
            end_time: Some(at(11, 0)),
        };
        let candidate = draft.to_new_appointment().expect("draft should convert");
        assert_eq!(candidate.client_name, "Jane Doe");
        assert_eq!(candidate.employee_id, draft.employee_id.unwrap());

        let incomplete = BookingDraft {
            start_time: None,
            ..draft
        };
        assert!(incomplete.to_new_appointment().is_none());
    }
}
