//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. For this application the
//! configuration is the static reference data behind the screens: the doctor
//! roster, the availability schedule, the preset symptom labels, and the
//! bookable time slots. Resolving it up front keeps the reference data out
//! of the event-handling code and validates it in one place.

use crate::error::ConfigError;
use crate::schedule::DoctorScheduleEntry;
use serde::Serialize;

/// A bookable doctor in the appointment form's roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Doctor {
    /// Stable roster id, as carried by the form's select options.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Medical specialty.
    pub specialty: String,
    /// Weekday labels on which the doctor takes appointments.
    pub availability: Vec<String>,
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    doctors: Vec<Doctor>,
    schedule: Vec<DoctorScheduleEntry>,
    symptom_presets: Vec<String>,
    time_slots: Vec<String>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the roster is empty, a doctor id appears
    /// twice, or the slot list is empty. Schedule entries carry their own
    /// invariant, enforced when they are constructed.
    pub fn new(
        doctors: Vec<Doctor>,
        schedule: Vec<DoctorScheduleEntry>,
        symptom_presets: Vec<String>,
        time_slots: Vec<String>,
    ) -> Result<Self, ConfigError> {
        if doctors.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        for (i, doctor) in doctors.iter().enumerate() {
            if doctors[..i].iter().any(|d| d.id == doctor.id) {
                return Err(ConfigError::DuplicateDoctorId(doctor.id.clone()));
            }
        }
        if time_slots.is_empty() {
            return Err(ConfigError::EmptySlots);
        }

        Ok(Self {
            doctors,
            schedule,
            symptom_presets,
            time_slots,
        })
    }

    /// The reference data shipped with the application.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from construction; with the built-in data
    /// this only fires if the data itself is edited into an invalid shape.
    pub fn builtin() -> Result<Self, ConfigError> {
        let doctors = vec![
            Doctor {
                id: "1".into(),
                name: "Dr. Mahnoor Saleem".into(),
                specialty: "Cardiologist".into(),
                availability: labels(&["Monday", "Wednesday", "Friday"]),
            },
            Doctor {
                id: "2".into(),
                name: "Dr. Michael Johnson".into(),
                specialty: "Pediatrician".into(),
                availability: labels(&["Tuesday", "Thursday", "Saturday"]),
            },
            Doctor {
                id: "3".into(),
                name: "Dr. Sarah Patel".into(),
                specialty: "Dermatologist".into(),
                availability: labels(&["Monday", "Wednesday", "Friday"]),
            },
        ];

        let schedule = vec![
            DoctorScheduleEntry::new(
                "Dr. Mahnoor Saleem",
                labels(&["Monday", "Tuesday", "Thursday"]),
                labels(&[
                    "9:00 AM - 12:00 PM",
                    "2:00 PM - 5:00 PM",
                    "9:00 AM - 12:00 PM",
                ]),
            )?,
            DoctorScheduleEntry::new(
                "Dr. Jane Smith",
                labels(&["Wednesday", "Friday"]),
                labels(&["10:00 AM - 1:00 PM", "3:00 PM - 6:00 PM"]),
            )?,
            DoctorScheduleEntry::new(
                "Dr. Patrick Bateman",
                labels(&["Monday", "Wednesday", "Friday"]),
                labels(&[
                    "8:00 AM - 11:00 AM",
                    "1:00 PM - 4:00 PM",
                    "8:00 AM - 11:00 AM",
                ]),
            )?,
        ];

        let symptom_presets = labels(&["Fever", "Cough"]);
        let time_slots = labels(&["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM"]);

        Self::new(doctors, schedule, symptom_presets, time_slots)
    }

    /// The bookable doctor roster.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Look up a roster doctor by id.
    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    /// The availability schedule backing the filterable table.
    pub fn schedule(&self) -> &[DoctorScheduleEntry] {
        &self.schedule
    }

    /// Symptom labels offered as checkboxes on the intake form.
    pub fn symptom_presets(&self) -> &[String] {
        &self.symptom_presets
    }

    /// The bookable time slots.
    ///
    /// The list is fixed and independent of date and doctor; real
    /// availability computation is explicitly out of scope.
    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
