//! # MedScheduler Core
//!
//! Core domain logic for the MedScheduler appointment demo.
//!
//! This crate contains pure in-memory state management:
//! - Patient intake records with create/update/delete/list and store-owned
//!   sequential ids
//! - The intake form session (create vs. edit mode, validation gating)
//! - The doctor-availability schedule and its case-insensitive filter view
//! - The peripheral appointment booking draft
//! - The top-level `Intake -> Booking` application flow
//!
//! **No presentation concerns**: rendering, prompting, and terminal handling
//! belong to the binaries. The boundary is events in ([`AppEvent`]) and
//! read-only snapshots out ([`AppSnapshot`]).
//!
//! Everything is single-threaded and event-driven: each event runs to
//! completion before the next is handled, there is no persistence, and no
//! state survives a restart.

pub mod appointment;
pub mod config;
pub mod error;
pub mod flow;
pub mod patient;
pub mod schedule;
pub mod session;
pub mod store;
pub mod validation;

pub use appointment::{AppointmentDraft, BookingConfirmation, BookingDesk, BookingField};
pub use config::{CoreConfig, Doctor};
pub use error::{ConfigError, DraftField, FlowError, FlowResult, ValidationError};
pub use flow::{AppEvent, AppFlow, AppSnapshot, EventOutcome, Screen};
pub use patient::{Gender, IntakeFields, PatientDraft, PatientId, PatientRecord};
pub use schedule::{filter_schedule, DoctorScheduleEntry};
pub use session::{Committed, FieldChange, FormSession, Mode, SessionSnapshot, SubmitOutcome};
pub use store::RecordStore;
pub use validation::validate_draft;

// Validated primitives come from the shared types crate.
pub use medsched_types::{Age, AgeError, NonEmptyText, TextError};
