//! Appointment booking draft handling.
//!
//! The booking form is a flat set of controlled fields with no cross-field
//! consistency checks. Whether the chosen doctor actually works on the
//! chosen date is out of scope, as is any real availability computation.
//! What the form does enforce: every field non-empty, the date a real
//! calendar date no earlier than today, and the doctor taken from the
//! roster.

use crate::config::CoreConfig;
use crate::error::{DraftField, ValidationError};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

/// Unvalidated booking form state. Never stored; cleared on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentDraft {
    /// Date input in `YYYY-MM-DD` form, possibly empty.
    pub date: String,
    /// Selected time slot label, possibly empty.
    pub time: String,
    /// Selected roster doctor id, possibly empty.
    pub doctor_id: String,
}

/// A single booking-form input change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingField {
    /// The date input changed.
    Date(String),
    /// The time-slot select changed.
    Time(String),
    /// The doctor select changed; carries the roster id.
    Doctor(String),
}

/// Confirmation returned by a successful booking submit.
///
/// Carries everything the confirmation dialog displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    /// The booked date.
    pub date: NaiveDate,
    /// The booked time slot label.
    pub time: String,
    /// Doctor description in "Name, Specialty" form.
    pub doctor: String,
}

/// Booking form state bound to the roster and slot list in [`CoreConfig`].
#[derive(Debug)]
pub struct BookingDesk {
    cfg: Arc<CoreConfig>,
    draft: AppointmentDraft,
}

impl BookingDesk {
    /// Create a desk with a blank draft.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            draft: AppointmentDraft::default(),
        }
    }

    /// The draft as currently edited.
    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    /// Apply a booking-form input change.
    pub fn apply(&mut self, field: BookingField) {
        match field {
            BookingField::Date(value) => self.draft.date = value,
            BookingField::Time(value) => self.draft.time = value,
            BookingField::Doctor(value) => self.draft.doctor_id = value,
        }
    }

    /// The offered time slots.
    ///
    /// The arguments are accepted but unused: the slot list is fixed
    /// reference data. Real availability computation would start here.
    pub fn available_slots(&self, _date: &str, _doctor_id: &str) -> &[String] {
        self.cfg.time_slots()
    }

    /// Describe a roster doctor as "Name, Specialty" for display.
    ///
    /// Returns `None` for ids not in the roster.
    pub fn doctor_info(&self, doctor_id: &str) -> Option<String> {
        self.cfg
            .doctor(doctor_id)
            .map(|doctor| format!("{}, {}", doctor.name, doctor.specialty))
    }

    /// Validate and submit the draft, with today's date as the reference.
    ///
    /// See [`submit_as_of`](Self::submit_as_of).
    pub fn submit(&mut self) -> Result<BookingConfirmation, ValidationError> {
        self.submit_as_of(chrono::Local::now().date_naive())
    }

    /// Validate and submit the draft against an explicit reference date.
    ///
    /// Checks that the date parses as `YYYY-MM-DD` and is not before
    /// `today`, that a time slot is selected, and that the doctor id names a
    /// roster doctor. On success the draft is reset to blank and the booking
    /// is logged.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every failing field; the draft
    /// is left as-is so the user can correct it.
    pub fn submit_as_of(
        &mut self,
        today: NaiveDate,
    ) -> Result<BookingConfirmation, ValidationError> {
        let mut failed = Vec::new();

        let date = match NaiveDate::parse_from_str(self.draft.date.trim(), "%Y-%m-%d") {
            Ok(date) if date >= today => Some(date),
            _ => {
                failed.push(DraftField::Date);
                None
            }
        };

        let time = self.draft.time.trim();
        if time.is_empty() {
            failed.push(DraftField::Time);
        }

        let doctor = match self.doctor_info(self.draft.doctor_id.trim()) {
            Some(info) => Some(info),
            None => {
                failed.push(DraftField::Doctor);
                None
            }
        };

        match (date, doctor) {
            (Some(date), Some(doctor)) if failed.is_empty() => {
                let confirmation = BookingConfirmation {
                    date,
                    time: time.to_owned(),
                    doctor,
                };
                self.draft = AppointmentDraft::default();
                tracing::info!(
                    date = %confirmation.date,
                    time = %confirmation.time,
                    doctor = %confirmation.doctor,
                    "appointment booked"
                );
                Ok(confirmation)
            }
            _ => Err(ValidationError { fields: failed }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> BookingDesk {
        BookingDesk::new(Arc::new(CoreConfig::builtin().expect("builtin config")))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
    }

    fn fill(desk: &mut BookingDesk, date: &str) {
        desk.apply(BookingField::Date(date.into()));
        desk.apply(BookingField::Time("9:00 AM".into()));
        desk.apply(BookingField::Doctor("1".into()));
    }

    #[test]
    fn slots_are_fixed_regardless_of_inputs() {
        let desk = desk();
        assert_eq!(
            desk.available_slots("2026-03-02", "1"),
            desk.available_slots("", "")
        );
        assert_eq!(desk.available_slots("", "").len(), 5);
    }

    #[test]
    fn doctor_info_formats_name_and_specialty() {
        let desk = desk();
        assert_eq!(
            desk.doctor_info("1").as_deref(),
            Some("Dr. Mahnoor Saleem, Cardiologist")
        );
        assert_eq!(desk.doctor_info("99"), None);
    }

    #[test]
    fn submit_accepts_today_and_clears_the_draft() {
        let mut desk = desk();
        fill(&mut desk, "2026-03-02");

        let confirmation = desk.submit_as_of(today()).expect("valid booking");
        assert_eq!(confirmation.date, today());
        assert_eq!(confirmation.time, "9:00 AM");
        assert_eq!(confirmation.doctor, "Dr. Mahnoor Saleem, Cardiologist");
        assert_eq!(desk.draft(), &AppointmentDraft::default());
    }

    #[test]
    fn submit_rejects_past_dates() {
        let mut desk = desk();
        fill(&mut desk, "2026-03-01");

        let err = desk.submit_as_of(today()).expect_err("expected rejection");
        assert_eq!(err.fields, vec![DraftField::Date]);
    }

    #[test]
    fn submit_rejects_malformed_dates() {
        let mut desk = desk();
        fill(&mut desk, "02/03/2026");

        let err = desk.submit_as_of(today()).expect_err("expected rejection");
        assert_eq!(err.fields, vec![DraftField::Date]);
    }

    #[test]
    fn submit_rejects_unknown_doctor_ids() {
        let mut desk = desk();
        fill(&mut desk, "2026-03-02");
        desk.apply(BookingField::Doctor("99".into()));

        let err = desk.submit_as_of(today()).expect_err("expected rejection");
        assert_eq!(err.fields, vec![DraftField::Doctor]);
    }

    #[test]
    fn failed_submit_keeps_the_draft_for_correction() {
        let mut desk = desk();
        desk.apply(BookingField::Time("9:00 AM".into()));

        let err = desk.submit_as_of(today()).expect_err("expected rejection");
        assert_eq!(err.fields, vec![DraftField::Date, DraftField::Doctor]);
        assert_eq!(desk.draft().time, "9:00 AM");
    }

    #[test]
    fn blank_submit_reports_all_three_fields() {
        let mut desk = desk();
        let err = desk.submit_as_of(today()).expect_err("expected rejection");
        assert_eq!(
            err.fields,
            vec![DraftField::Date, DraftField::Time, DraftField::Doctor]
        );
    }
}
