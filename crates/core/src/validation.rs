//! Intake draft validation.
//!
//! This module turns an unvalidated [`PatientDraft`] into the validated field
//! set the record store accepts. Validation collects every failing field
//! rather than stopping at the first, so the form can highlight all of them
//! in one pass.

use crate::error::{DraftField, ValidationError};
use crate::patient::{IntakeFields, PatientDraft};
use medsched_types::{Age, NonEmptyText};

/// Validate an intake draft.
///
/// Checks, in form order:
/// - `name` is non-empty after trimming
/// - `age` is present and positive
/// - `gender` is selected
/// - the merged symptom set (checked symptoms plus the custom symptom) is
///   non-empty
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every failing field. The draft is
/// never mutated.
pub fn validate_draft(draft: &PatientDraft) -> Result<IntakeFields, ValidationError> {
    let mut failed = Vec::new();

    let name = match NonEmptyText::new(&draft.name) {
        Ok(name) => Some(name),
        Err(_) => {
            failed.push(DraftField::Name);
            None
        }
    };

    let age = match draft.age.map(Age::new) {
        Some(Ok(age)) => Some(age),
        _ => {
            failed.push(DraftField::Age);
            None
        }
    };

    let gender = draft.gender;
    if gender.is_none() {
        failed.push(DraftField::Gender);
    }

    let symptoms = draft.merged_symptoms();
    if symptoms.is_empty() {
        failed.push(DraftField::Symptoms);
    }

    match (name, age, gender) {
        (Some(name), Some(age), Some(gender)) if failed.is_empty() => Ok(IntakeFields {
            name,
            age,
            gender,
            symptoms,
        }),
        _ => Err(ValidationError { fields: failed }),
    }
}
