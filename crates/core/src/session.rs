//! Intake form session.
//!
//! The session is the transient edit state behind the intake form: a draft
//! plus a mode saying whether a submit will create a new record or replace an
//! existing one. Field-change events mutate only the draft; the record store
//! is touched exclusively by a successful submit.
//!
//! State machine:
//!
//! ```text
//! Creating --begin_edit(record)--> Editing(id)
//! Editing(id) --submit/clear/record_deleted(id)--> Creating
//! ```

use crate::error::ValidationError;
use crate::patient::{Gender, PatientDraft, PatientId, PatientRecord};
use crate::store::RecordStore;
use crate::validation::validate_draft;
use serde::Serialize;

/// Whether the session is creating a new record or editing an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Mode {
    /// The draft will become a new record on submit.
    Creating,
    /// The draft was seeded from the record with this id and will replace it
    /// on submit.
    Editing(PatientId),
}

/// A single form-input change, as delivered by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldChange {
    /// The name input changed.
    Name(String),
    /// The age input changed; carries the raw input text.
    Age(String),
    /// The gender select changed; carries the selected label.
    Gender(String),
    /// A symptom checkbox was toggled; carries the checkbox label.
    SymptomToggled(String),
    /// The free-text "other symptom" input changed.
    CustomSymptom(String),
}

/// How a submit was committed to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Committed {
    /// A new record was appended.
    Created,
    /// An existing record was replaced.
    Updated,
}

/// The "form completed" notification returned by a successful submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    /// Id of the record that was created or replaced.
    pub id: PatientId,
    /// Whether the submit created or updated.
    pub committed: Committed,
}

/// Read-only view of the session for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub mode: Mode,
    pub draft: PatientDraft,
}

/// Transient edit state for the intake form.
#[derive(Debug, Default)]
pub struct FormSession {
    mode: Option<PatientId>,
    draft: PatientDraft,
}

impl FormSession {
    /// Start a session with a blank draft in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        match self.mode {
            Some(id) => Mode::Editing(id),
            None => Mode::Creating,
        }
    }

    /// The draft as currently edited.
    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    /// Apply a field-change event to the draft.
    ///
    /// Lenient, like the form inputs it mirrors: an unparseable age leaves the
    /// age unset and an unknown gender label clears the selection, the same
    /// way an emptied input or the placeholder option would.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Name(value) => self.draft.name = value,
            FieldChange::Age(value) => self.draft.age = value.trim().parse().ok(),
            FieldChange::Gender(value) => self.draft.gender = Gender::from_label(value.trim()),
            FieldChange::SymptomToggled(label) => self.draft.toggle_symptom(&label),
            FieldChange::CustomSymptom(value) => self.draft.custom_symptom = value,
        }
    }

    /// Enter edit mode, seeding the draft with a copy of the record's fields.
    ///
    /// The draft is a copy, not a shared reference: nothing the user edits
    /// reaches the stored record until submit.
    pub fn begin_edit(&mut self, record: &PatientRecord) {
        self.draft = PatientDraft::from_record(record);
        self.mode = Some(record.id);
    }

    /// Reset to a blank draft in create mode, discarding any edits.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Notify the session that a record was deleted from the store.
    ///
    /// If that record was being edited, the session falls back to a blank
    /// create-mode draft; otherwise nothing changes.
    pub fn record_deleted(&mut self, id: PatientId) {
        if self.mode == Some(id) {
            self.clear();
        }
    }

    /// Validate the draft and commit it to the store.
    ///
    /// In create mode the store appends a new record; in edit mode it
    /// replaces the fields of the record being edited. Either way the session
    /// resets to a blank create-mode draft and the outcome doubles as the
    /// one-shot "form completed" notification.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing the failing fields. On failure
    /// neither the draft nor the store is modified.
    pub fn submit(&mut self, store: &mut RecordStore) -> Result<SubmitOutcome, ValidationError> {
        let fields = validate_draft(&self.draft)?;
        let outcome = match self.mode {
            None => SubmitOutcome {
                id: store.add(fields),
                committed: Committed::Created,
            },
            Some(id) => {
                store.update(id, fields);
                SubmitOutcome {
                    id,
                    committed: Committed::Updated,
                }
            }
        };
        self.clear();
        Ok(outcome)
    }

    /// Read-only snapshot of mode and draft for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode(),
            draft: self.draft.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid_draft(session: &mut FormSession) {
        session.apply(FieldChange::Name("Alice".into()));
        session.apply(FieldChange::Age("30".into()));
        session.apply(FieldChange::Gender("Female".into()));
        session.apply(FieldChange::SymptomToggled("Fever".into()));
    }

    #[test]
    fn starts_in_create_mode_with_a_blank_draft() {
        let session = FormSession::new();
        assert_eq!(session.mode(), Mode::Creating);
        assert_eq!(session.draft(), &PatientDraft::default());
    }

    #[test]
    fn unparseable_age_input_leaves_age_unset() {
        let mut session = FormSession::new();
        session.apply(FieldChange::Age("30".into()));
        assert_eq!(session.draft().age, Some(30));

        session.apply(FieldChange::Age("thirty".into()));
        assert_eq!(session.draft().age, None);
    }

    #[test]
    fn unknown_gender_label_clears_the_selection() {
        let mut session = FormSession::new();
        session.apply(FieldChange::Gender("Female".into()));
        assert_eq!(session.draft().gender, Some(Gender::Female));

        session.apply(FieldChange::Gender("".into()));
        assert_eq!(session.draft().gender, None);
    }

    #[test]
    fn submit_in_create_mode_appends_and_resets() {
        let mut store = RecordStore::new();
        let mut session = FormSession::new();
        fill_valid_draft(&mut session);

        let outcome = session.submit(&mut store).expect("valid submit");
        assert_eq!(outcome.committed, Committed::Created);
        assert_eq!(outcome.id.value(), 1);

        assert_eq!(store.len(), 1);
        assert_eq!(session.mode(), Mode::Creating);
        assert_eq!(session.draft(), &PatientDraft::default());
    }

    #[test]
    fn failed_submit_mutates_neither_store_nor_draft() {
        let mut store = RecordStore::new();
        let mut session = FormSession::new();
        session.apply(FieldChange::Name("Alice".into()));

        let err = session.submit(&mut store).expect_err("invalid submit");
        assert!(!err.fields.is_empty());
        assert!(store.is_empty());
        assert_eq!(session.draft().name, "Alice");
    }

    #[test]
    fn begin_edit_copies_fields_without_sharing() {
        let mut store = RecordStore::new();
        let mut session = FormSession::new();
        fill_valid_draft(&mut session);
        let id = session.submit(&mut store).expect("valid submit").id;

        let record = store.get(id).expect("record present").clone();
        session.begin_edit(&record);
        assert_eq!(session.mode(), Mode::Editing(id));
        assert_eq!(session.draft().name, "Alice");

        // Editing the draft must not touch the stored record.
        session.apply(FieldChange::Name("Mallory".into()));
        assert_eq!(store.get(id).expect("record present").name.as_str(), "Alice");
    }

    #[test]
    fn submit_in_edit_mode_replaces_in_place_and_returns_to_create_mode() {
        let mut store = RecordStore::new();
        let mut session = FormSession::new();
        fill_valid_draft(&mut session);
        session.submit(&mut store).expect("valid submit");

        fill_valid_draft(&mut session);
        session.apply(FieldChange::Name("Bob".into()));
        let bob = session.submit(&mut store).expect("valid submit").id;

        let record = store.get(bob).expect("record present").clone();
        session.begin_edit(&record);
        session.apply(FieldChange::Name("Robert".into()));
        let outcome = session.submit(&mut store).expect("valid submit");

        assert_eq!(outcome, SubmitOutcome { id: bob, committed: Committed::Updated });
        assert_eq!(session.mode(), Mode::Creating);

        // Same id, same position, new fields.
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[1].id, bob);
        assert_eq!(store.list()[1].name.as_str(), "Robert");
    }

    #[test]
    fn clear_during_edit_leaves_the_store_unchanged() {
        let mut store = RecordStore::new();
        let mut session = FormSession::new();
        fill_valid_draft(&mut session);
        let id = session.submit(&mut store).expect("valid submit").id;

        let record = store.get(id).expect("record present").clone();
        session.begin_edit(&record);
        session.apply(FieldChange::Name("Changed".into()));
        session.clear();

        assert_eq!(session.mode(), Mode::Creating);
        assert_eq!(store.get(id).expect("record present").name.as_str(), "Alice");
    }

    #[test]
    fn deleting_the_record_being_edited_resets_the_session() {
        let mut store = RecordStore::new();
        let mut session = FormSession::new();
        fill_valid_draft(&mut session);
        let id = session.submit(&mut store).expect("valid submit").id;

        let record = store.get(id).expect("record present").clone();
        session.begin_edit(&record);
        store.remove(id);
        session.record_deleted(id);

        assert_eq!(session.mode(), Mode::Creating);
        assert_eq!(session.draft(), &PatientDraft::default());
    }

    #[test]
    fn deleting_an_unrelated_record_leaves_the_session_alone() {
        let mut store = RecordStore::new();
        let mut session = FormSession::new();
        fill_valid_draft(&mut session);
        let alice = session.submit(&mut store).expect("valid submit").id;
        fill_valid_draft(&mut session);
        session.apply(FieldChange::Name("Bob".into()));
        let bob = session.submit(&mut store).expect("valid submit").id;

        let record = store.get(alice).expect("record present").clone();
        session.begin_edit(&record);
        store.remove(bob);
        session.record_deleted(bob);

        assert_eq!(session.mode(), Mode::Editing(alice));
    }
}
