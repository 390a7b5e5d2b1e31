//! Console presentation layer for the MedScheduler demo.
//!
//! The core is presentation-agnostic: events in, snapshots out. This crate
//! is the terminal rendition of the application screens (the intake form,
//! the patient list, the availability schedule with its filter, and the
//! booking form), driven by line commands instead of form inputs.

pub mod console;
