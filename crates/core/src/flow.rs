//! Top-level application flow.
//!
//! The booking screen is gated behind intake completion. Rather than an
//! ambient "form completed" flag, the gate is an explicit state machine
//! owned by [`AppFlow`], the single owner of the record store, the form
//! session, the booking desk, and the schedule filter. The presentation
//! layer talks to it exclusively through [`AppEvent`] values in and
//! [`AppSnapshot`] values out.

use crate::appointment::{AppointmentDraft, BookingConfirmation, BookingDesk, BookingField};
use crate::config::{CoreConfig, Doctor};
use crate::error::{FlowError, FlowResult};
use crate::patient::{PatientId, PatientRecord};
use crate::schedule::{filter_schedule, DoctorScheduleEntry};
use crate::session::{FieldChange, FormSession, SessionSnapshot, SubmitOutcome};
use crate::store::RecordStore;
use serde::Serialize;
use std::sync::Arc;

/// Which screen the application is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// Patient intake; booking is not yet reachable.
    Intake,
    /// Appointment booking, reached by completing intake. Patient management
    /// stays available.
    Booking,
}

/// An inbound user-input event, as delivered by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// An intake form input changed.
    Field(FieldChange),
    /// The intake form was submitted.
    Submit,
    /// The intake form's clear button was pressed.
    Clear,
    /// An edit button was pressed on the patient list.
    EditRequested(PatientId),
    /// A delete button was pressed on the patient list.
    DeleteRequested(PatientId),
    /// The schedule filter input changed.
    ScheduleFilterChanged(String),
    /// A booking form input changed.
    Booking(BookingField),
    /// The booking form was submitted.
    BookSubmit,
}

/// What handling an event produced, beyond the state change itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was absorbed into state; nothing further to report.
    Applied,
    /// An intake submit succeeded; this is the one-shot "form completed"
    /// notification that unlocks the booking screen.
    IntakeCompleted(SubmitOutcome),
    /// A booking submit succeeded.
    Booked(BookingConfirmation),
}

/// Read-only view of the entire application state for rendering.
#[derive(Clone, Debug, Serialize)]
pub struct AppSnapshot {
    /// The screen to show.
    pub screen: Screen,
    /// All patient records, insertion order.
    pub patients: Vec<PatientRecord>,
    /// Intake form state.
    pub form: SessionSnapshot,
    /// Current schedule filter text.
    pub filter: String,
    /// Schedule entries matching the filter, in reference-data order.
    pub schedule: Vec<DoctorScheduleEntry>,
    /// Booking form state.
    pub booking: AppointmentDraft,
    /// The bookable doctor roster.
    pub doctors: Vec<Doctor>,
}

/// Single-threaded controller owning all application state.
#[derive(Debug)]
pub struct AppFlow {
    cfg: Arc<CoreConfig>,
    store: RecordStore,
    session: FormSession,
    desk: BookingDesk,
    screen: Screen,
    filter: String,
}

impl AppFlow {
    /// Create a flow on the intake screen with empty state.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            desk: BookingDesk::new(cfg.clone()),
            cfg,
            store: RecordStore::new(),
            session: FormSession::new(),
            screen: Screen::Intake,
            filter: String::new(),
        }
    }

    /// The screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The record store (read access for rendering and tests).
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The intake form session.
    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// The booking desk.
    pub fn desk(&self) -> &BookingDesk {
        &self.desk
    }

    /// The configuration this flow was created with.
    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// The current schedule filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Schedule entries matching the current filter.
    pub fn filtered_schedule(&self) -> Vec<&DoctorScheduleEntry> {
        filter_schedule(self.cfg.schedule(), &self.filter)
    }

    /// Handle one user-input event, running it to completion.
    ///
    /// # Errors
    ///
    /// - [`FlowError::Validation`] for a rejected intake or booking submit;
    ///   state is left untouched so the user can correct the form.
    /// - [`FlowError::UnknownPatient`] for an edit request naming an id not
    ///   in the store.
    /// - [`FlowError::BookingNotReached`] for booking events before the
    ///   intake form has been completed.
    pub fn handle(&mut self, event: AppEvent) -> FlowResult<EventOutcome> {
        match event {
            AppEvent::Field(change) => {
                self.session.apply(change);
                Ok(EventOutcome::Applied)
            }
            AppEvent::Submit => {
                let outcome = self.session.submit(&mut self.store)?;
                self.screen = Screen::Booking;
                Ok(EventOutcome::IntakeCompleted(outcome))
            }
            AppEvent::Clear => {
                self.session.clear();
                Ok(EventOutcome::Applied)
            }
            AppEvent::EditRequested(id) => match self.store.get(id) {
                Some(record) => {
                    let record = record.clone();
                    self.session.begin_edit(&record);
                    Ok(EventOutcome::Applied)
                }
                None => Err(FlowError::UnknownPatient(id)),
            },
            AppEvent::DeleteRequested(id) => {
                // Deleting an unknown id stays a benign no-op.
                self.store.remove(id);
                self.session.record_deleted(id);
                Ok(EventOutcome::Applied)
            }
            AppEvent::ScheduleFilterChanged(text) => {
                self.filter = text;
                Ok(EventOutcome::Applied)
            }
            AppEvent::Booking(field) => {
                if self.screen != Screen::Booking {
                    return Err(FlowError::BookingNotReached);
                }
                self.desk.apply(field);
                Ok(EventOutcome::Applied)
            }
            AppEvent::BookSubmit => {
                if self.screen != Screen::Booking {
                    return Err(FlowError::BookingNotReached);
                }
                let confirmation = self.desk.submit()?;
                Ok(EventOutcome::Booked(confirmation))
            }
        }
    }

    /// Read-only snapshot of everything the presentation layer renders.
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            screen: self.screen,
            patients: self.store.list().to_vec(),
            form: self.session.snapshot(),
            filter: self.filter.clone(),
            schedule: self.filtered_schedule().into_iter().cloned().collect(),
            booking: self.desk.draft().clone(),
            doctors: self.cfg.doctors().to_vec(),
        }
    }
}
