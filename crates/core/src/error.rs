//! Error types for the scheduling core.
//!
//! Validation failures are structured rather than silent: a failed submit
//! returns a [`ValidationError`] naming every field that failed, and the
//! presentation layer decides how to surface it.

use crate::patient::PatientId;

/// A form field that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    /// Patient name (intake form).
    Name,
    /// Patient age (intake form).
    Age,
    /// Patient gender (intake form).
    Gender,
    /// Symptom set (intake form).
    Symptoms,
    /// Appointment date (booking form).
    Date,
    /// Appointment time (booking form).
    Time,
    /// Selected doctor (booking form).
    Doctor,
}

impl DraftField {
    /// Human-readable label for the field, as shown next to form inputs.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Age => "age",
            DraftField::Gender => "gender",
            DraftField::Symptoms => "symptoms",
            DraftField::Date => "date",
            DraftField::Time => "time",
            DraftField::Doctor => "doctor",
        }
    }
}

/// A submit was rejected because one or more required fields were missing or invalid.
///
/// `fields` lists every failing field in form order, so the presentation layer
/// can highlight all of them at once instead of one per attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid or missing fields: {}", field_list(.fields))]
pub struct ValidationError {
    /// The failing fields, in form order; never empty.
    pub fields: Vec<DraftField>,
}

fn field_list(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors surfaced by the top-level application flow.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("the intake form must be completed before booking")]
    BookingNotReached,
    #[error("no patient with id {0}")]
    UnknownPatient(PatientId),
}

/// Errors detected while constructing core configuration.
///
/// These can only occur at startup; nothing here is reachable from user input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("schedule entry for {name} has {days} day(s) but {times} time range(s)")]
    ScheduleShape {
        name: String,
        days: usize,
        times: usize,
    },
    #[error("duplicate doctor id: {0}")]
    DuplicateDoctorId(String),
    #[error("doctor roster cannot be empty")]
    EmptyRoster,
    #[error("time slot list cannot be empty")]
    EmptySlots,
}

pub type FlowResult<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_failing_field() {
        let err = ValidationError {
            fields: vec![DraftField::Name, DraftField::Age, DraftField::Symptoms],
        };
        assert_eq!(
            err.to_string(),
            "invalid or missing fields: name, age, symptoms"
        );
    }

    #[test]
    fn flow_error_wraps_validation_transparently() {
        let err = FlowError::from(ValidationError {
            fields: vec![DraftField::Gender],
        });
        assert_eq!(err.to_string(), "invalid or missing fields: gender");
    }
}
