//! Patient record and draft types.
//!
//! This module defines the stored patient record, the unvalidated draft the
//! intake form edits, and the validated field set that moves between them.
//!
//! Responsibilities:
//! - Define the closed gender label set with label translation helpers
//! - Define `PatientRecord` as committed to the record store
//! - Define `PatientDraft` as edited by the form session, including the
//!   custom-symptom merge performed at submit time

use medsched_types::{Age, NonEmptyText};
use serde::Serialize;

/// Identifier for a patient record, unique within a [`RecordStore`].
///
/// Ids are assigned by the store from a monotonically increasing counter and
/// are never reused, even after the record with the highest id is deleted.
///
/// [`RecordStore`]: crate::store::RecordStore
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PatientId(u64);

impl PatientId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender of a patient.
///
/// The label set is closed and matches the options offered by the intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// The label shown in the form's select options.
    pub fn as_label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        }
    }

    /// Parse a form label back into a gender.
    ///
    /// Returns `None` for anything outside the closed label set, including the
    /// empty "Select gender" placeholder.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Female" => Some(Gender::Female),
            "Male" => Some(Gender::Male),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A committed patient intake record.
///
/// Records only ever come out of a [`RecordStore`] and are guaranteed valid:
/// non-empty name, positive age, selected gender, at least one symptom.
///
/// [`RecordStore`]: crate::store::RecordStore
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientRecord {
    /// Store-assigned identifier.
    pub id: PatientId,
    /// Patient name.
    pub name: NonEmptyText,
    /// Patient age in years.
    pub age: Age,
    /// Patient gender.
    pub gender: Gender,
    /// Reported symptoms, duplicate-free, in the order they were added.
    pub symptoms: Vec<String>,
}

/// The validated field set produced by a successful intake submit.
///
/// This is what the store accepts for both `add` and `update`; it carries no
/// id because ids belong to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeFields {
    pub name: NonEmptyText,
    pub age: Age,
    pub gender: Gender,
    /// Non-empty, duplicate-free symptom list with the custom symptom merged in.
    pub symptoms: Vec<String>,
}

/// Unvalidated intake form state.
///
/// Every field mirrors one form input and accepts whatever the user has typed
/// so far; validation happens only at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PatientDraft {
    /// Name input, possibly empty.
    pub name: String,
    /// Age input; `None` while empty or unparseable.
    pub age: Option<u32>,
    /// Selected gender; `None` while the placeholder is selected.
    pub gender: Option<Gender>,
    /// Checked symptom labels, duplicate-free, in check order.
    pub symptoms: Vec<String>,
    /// Free-text "other symptom" input, merged into `symptoms` on submit.
    pub custom_symptom: String,
}

impl PatientDraft {
    /// Seed a draft from an existing record for editing.
    ///
    /// The record's fields are copied, so edits never touch the stored record
    /// until submit. The custom-symptom input starts empty.
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            name: record.name.as_str().to_owned(),
            age: Some(record.age.get()),
            gender: Some(record.gender),
            symptoms: record.symptoms.clone(),
            custom_symptom: String::new(),
        }
    }

    /// Toggle a symptom label: add it if absent, remove it if present.
    ///
    /// Blank labels are ignored; labels are trimmed before comparison so a
    /// checkbox value never matches a padded duplicate.
    pub fn toggle_symptom(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        if let Some(pos) = self.symptoms.iter().position(|s| s == label) {
            self.symptoms.remove(pos);
        } else {
            self.symptoms.push(label.to_owned());
        }
    }

    /// The symptom list as it would be committed: checked symptoms plus the
    /// trimmed custom symptom, duplicate-free, insertion order preserved.
    pub fn merged_symptoms(&self) -> Vec<String> {
        let mut merged = self.symptoms.clone();
        let custom = self.custom_symptom.trim();
        if !custom.is_empty() && !merged.iter().any(|s| s == custom) {
            merged.push(custom.to_owned());
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_labels_round_trip() {
        for gender in [Gender::Female, Gender::Male, Gender::Other] {
            assert_eq!(Gender::from_label(gender.as_label()), Some(gender));
        }
    }

    #[test]
    fn gender_rejects_placeholder_and_unknown_labels() {
        assert_eq!(Gender::from_label(""), None);
        assert_eq!(Gender::from_label("female"), None);
        assert_eq!(Gender::from_label("Unknown"), None);
    }

    #[test]
    fn toggle_symptom_adds_then_removes() {
        let mut draft = PatientDraft::default();
        draft.toggle_symptom("Fever");
        draft.toggle_symptom("Cough");
        assert_eq!(draft.symptoms, vec!["Fever", "Cough"]);

        draft.toggle_symptom("Fever");
        assert_eq!(draft.symptoms, vec!["Cough"]);
    }

    #[test]
    fn toggle_symptom_ignores_blank_labels() {
        let mut draft = PatientDraft::default();
        draft.toggle_symptom("   ");
        assert!(draft.symptoms.is_empty());
    }

    #[test]
    fn merged_symptoms_includes_trimmed_custom_symptom() {
        let mut draft = PatientDraft::default();
        draft.toggle_symptom("Fever");
        draft.custom_symptom = "  Headache ".into();
        assert_eq!(draft.merged_symptoms(), vec!["Fever", "Headache"]);
    }

    #[test]
    fn merged_symptoms_deduplicates_custom_symptom() {
        let mut draft = PatientDraft::default();
        draft.toggle_symptom("Fever");
        draft.custom_symptom = "Fever".into();
        assert_eq!(draft.merged_symptoms(), vec!["Fever"]);
    }

    #[test]
    fn merged_symptoms_ignores_blank_custom_symptom() {
        let mut draft = PatientDraft::default();
        draft.toggle_symptom("Cough");
        draft.custom_symptom = "   ".into();
        assert_eq!(draft.merged_symptoms(), vec!["Cough"]);
    }
}
