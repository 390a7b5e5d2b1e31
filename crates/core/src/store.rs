//! In-memory patient record store.
//!
//! An ordered collection of committed intake records. The store owns id
//! assignment: ids come from a monotonically increasing counter, so deleting
//! the record with the highest id can never cause a later `add` to collide
//! with or reuse an id.
//!
//! All mutations are synchronous and driven by a single event loop; there is
//! no interior mutability and no locking. Nothing survives a restart.

use crate::patient::{IntakeFields, PatientId, PatientRecord};

/// Ordered, in-memory collection of patient records keyed by [`PatientId`].
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<PatientRecord>,
    next_id: u64,
}

impl RecordStore {
    /// Create an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new record, assigning the next id.
    pub fn add(&mut self, fields: IntakeFields) -> PatientId {
        let id = PatientId::new(self.next_id);
        self.next_id += 1;
        self.records.push(PatientRecord {
            id,
            name: fields.name,
            age: fields.age,
            gender: fields.gender,
            symptoms: fields.symptoms,
        });
        tracing::debug!(%id, "patient record added");
        id
    }

    /// Replace the fields of the record with the given id, keeping its id and
    /// position.
    ///
    /// Returns `true` if a record was updated. An unknown id is a benign
    /// no-op returning `false`.
    pub fn update(&mut self, id: PatientId, fields: IntakeFields) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.name = fields.name;
                record.age = fields.age;
                record.gender = fields.gender;
                record.symptoms = fields.symptoms;
                tracing::debug!(%id, "patient record updated");
                true
            }
            None => {
                tracing::warn!(%id, "update for unknown patient id ignored");
                false
            }
        }
    }

    /// Delete the record with the given id.
    ///
    /// Returns `true` if a record was removed. An unknown id is a benign
    /// no-op returning `false`.
    pub fn remove(&mut self, id: PatientId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() < before;
        if removed {
            tracing::debug!(%id, "patient record removed");
        } else {
            tracing::warn!(%id, "remove for unknown patient id ignored");
        }
        removed
    }

    /// Look up a record by id.
    pub fn get(&self, id: PatientId) -> Option<&PatientRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Gender;
    use medsched_types::{Age, NonEmptyText};

    fn fields(name: &str, age: u32) -> IntakeFields {
        IntakeFields {
            name: NonEmptyText::new(name).expect("valid name"),
            age: Age::new(age).expect("valid age"),
            gender: Gender::Female,
            symptoms: vec!["Fever".into()],
        }
    }

    #[test]
    fn add_assigns_sequential_ids_in_insertion_order() {
        let mut store = RecordStore::new();
        let first = store.add(fields("Alice", 30));
        let second = store.add(fields("Bob", 40));

        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);

        let names: Vec<_> = store.list().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn ids_stay_unique_across_many_adds() {
        let mut store = RecordStore::new();
        for i in 1..=20 {
            store.add(fields("Patient", i));
        }
        let mut ids: Vec<_> = store.list().iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn update_replaces_exactly_one_record_and_leaves_the_rest() {
        let mut store = RecordStore::new();
        let alice = store.add(fields("Alice", 30));
        let bob = store.add(fields("Bob", 40));

        assert!(store.update(alice, fields("Alicia", 31)));

        let updated = store.get(alice).expect("record present");
        assert_eq!(updated.name.as_str(), "Alicia");
        assert_eq!(updated.age.get(), 31);

        let untouched = store.get(bob).expect("record present");
        assert_eq!(untouched.name.as_str(), "Bob");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_keeps_the_record_position() {
        let mut store = RecordStore::new();
        let alice = store.add(fields("Alice", 30));
        store.add(fields("Bob", 40));

        store.update(alice, fields("Alicia", 31));
        assert_eq!(store.list()[0].id, alice);
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut store = RecordStore::new();
        let alice = store.add(fields("Alice", 30));
        store.remove(alice);

        assert!(!store.update(alice, fields("Ghost", 50)));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_deletes_only_the_matching_record() {
        let mut store = RecordStore::new();
        let alice = store.add(fields("Alice", 30));
        let bob = store.add(fields("Bob", 40));

        assert!(store.remove(alice));
        assert!(store.get(alice).is_none());
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, bob);
        assert_eq!(store.list()[0].name.as_str(), "Bob");
    }

    #[test]
    fn remove_of_unknown_id_leaves_the_store_unchanged() {
        let mut store = RecordStore::new();
        let alice = store.add(fields("Alice", 30));
        store.remove(alice);

        assert!(!store.remove(alice));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_never_reused_after_deleting_the_highest() {
        let mut store = RecordStore::new();
        let first = store.add(fields("Alice", 30));
        let second = store.add(fields("Bob", 40));
        store.remove(second);

        let third = store.add(fields("Carol", 50));
        assert_eq!(third.value(), 3);
        assert_ne!(third, second);
        assert_ne!(third, first);
    }
}
