//! Interactive console session.
//!
//! A small line-command loop over [`AppFlow`]. Each command maps to one
//! inbound event or one rendered view; the loop itself owns no state beyond
//! the flow it drives.

use medsched_core::{
    AppEvent, AppFlow, BookingField, EventOutcome, FieldChange, Mode, PatientId,
};
use std::io::{self, BufRead, Write};

/// Run the interactive session until end-of-input or `quit`.
pub fn run(flow: &mut AppFlow) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "MedScheduler")?;
    writeln!(
        out,
        "Warning: you can't move ahead without filling the intake form"
    )?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in stdin.lock().lines() {
        let line = line?;
        match dispatch(flow, line.trim()) {
            Some(text) => {
                out.write_all(text.as_bytes())?;
                out.flush()?;
            }
            None => break,
        }
    }
    Ok(())
}

/// Handle one command line, returning the text to print, or `None` on quit.
fn dispatch(flow: &mut AppFlow, line: &str) -> Option<String> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let text = match command {
        "" => String::new(),
        "help" => help_text(),
        "quit" | "exit" => return None,

        // Intake form inputs.
        "name" => apply(flow, AppEvent::Field(FieldChange::Name(rest.into()))),
        "age" => apply(flow, AppEvent::Field(FieldChange::Age(rest.into()))),
        "gender" => apply(flow, AppEvent::Field(FieldChange::Gender(rest.into()))),
        "symptom" => apply(
            flow,
            AppEvent::Field(FieldChange::SymptomToggled(rest.into())),
        ),
        "other" => apply(flow, AppEvent::Field(FieldChange::CustomSymptom(rest.into()))),
        "submit" => submit(flow),
        "clear" => apply(flow, AppEvent::Clear),
        "show" => render_form(flow),
        "patients" => render_patients(flow),
        "edit" => with_patient_id(flow, rest, |flow, id| apply(flow, AppEvent::EditRequested(id))),
        "delete" => {
            with_patient_id(flow, rest, |flow, id| apply(flow, AppEvent::DeleteRequested(id)))
        }

        // Schedule view.
        "filter" => apply(flow, AppEvent::ScheduleFilterChanged(rest.into())),
        "schedule" => render_schedule(flow),

        // Booking form.
        "doctors" => render_doctors(flow),
        "slots" => render_slots(flow),
        "date" => apply(flow, AppEvent::Booking(BookingField::Date(rest.into()))),
        "time" => apply(flow, AppEvent::Booking(BookingField::Time(rest.into()))),
        "doctor" => apply(flow, AppEvent::Booking(BookingField::Doctor(rest.into()))),
        "book" => submit_booking(flow),

        // Whole-state dump for debugging and scripting.
        "json" => match serde_json::to_string_pretty(&flow.snapshot()) {
            Ok(json) => format!("{json}\n"),
            Err(e) => format!("error: {e}\n"),
        },

        _ => format!("unknown command '{command}'; type 'help' for commands\n"),
    };
    Some(text)
}

fn apply(flow: &mut AppFlow, event: AppEvent) -> String {
    match flow.handle(event) {
        Ok(_) => String::new(),
        Err(e) => format!("error: {e}\n"),
    }
}

fn submit(flow: &mut AppFlow) -> String {
    match flow.handle(AppEvent::Submit) {
        Ok(EventOutcome::IntakeCompleted(outcome)) => format!(
            "Saved patient {} ({:?}). Booking is now open; see 'doctors' and 'slots'.\n",
            outcome.id, outcome.committed
        ),
        Ok(_) => String::new(),
        Err(e) => format!("error: {e}\n"),
    }
}

fn submit_booking(flow: &mut AppFlow) -> String {
    match flow.handle(AppEvent::BookSubmit) {
        Ok(EventOutcome::Booked(confirmation)) => format!(
            "Appointment booked: {} at {} with {}.\n",
            confirmation.date, confirmation.time, confirmation.doctor
        ),
        Ok(_) => String::new(),
        Err(e) => format!("error: {e}\n"),
    }
}

/// Resolve a numeric argument against the store's current ids.
fn with_patient_id(
    flow: &mut AppFlow,
    arg: &str,
    action: impl FnOnce(&mut AppFlow, PatientId) -> String,
) -> String {
    let Ok(value) = arg.parse::<u64>() else {
        return format!("expected a numeric patient id, got '{arg}'\n");
    };
    match flow
        .store()
        .list()
        .iter()
        .map(|record| record.id)
        .find(|id| id.value() == value)
    {
        Some(id) => action(flow, id),
        None => format!("error: no patient with id {value}\n"),
    }
}

fn render_form(flow: &AppFlow) -> String {
    let snapshot = flow.session().snapshot();
    let heading = match snapshot.mode {
        Mode::Creating => "New Patient Form",
        Mode::Editing(_) => "Edit Patient Details",
    };
    let mut text = format!("{heading}\n");
    text.push_str(&format!("  name:    {}\n", snapshot.draft.name));
    text.push_str(&format!(
        "  age:     {}\n",
        snapshot
            .draft
            .age
            .map(|a| a.to_string())
            .unwrap_or_default()
    ));
    text.push_str(&format!(
        "  gender:  {}\n",
        snapshot
            .draft
            .gender
            .map(|g| g.to_string())
            .unwrap_or_default()
    ));
    text.push_str(&format!(
        "  symptoms: {} (presets: {})\n",
        snapshot.draft.symptoms.join(", "),
        flow.config().symptom_presets().join(", ")
    ));
    if !snapshot.draft.custom_symptom.is_empty() {
        text.push_str(&format!("  other:   {}\n", snapshot.draft.custom_symptom));
    }
    text
}

fn render_patients(flow: &AppFlow) -> String {
    let patients = flow.store().list();
    if patients.is_empty() {
        return "No patients found.\n".into();
    }
    let mut text = String::from("Patient List\n");
    for patient in patients {
        text.push_str(&format!(
            "  ID: {}, Name: {}, Age: {}, Gender: {}, Symptoms: {}\n",
            patient.id,
            patient.name,
            patient.age,
            patient.gender,
            patient.symptoms.join(", ")
        ));
    }
    text
}

fn render_schedule(flow: &AppFlow) -> String {
    let entries = flow.filtered_schedule();
    if entries.is_empty() {
        return "No doctors match the current filter.\n".into();
    }
    let mut text = String::from("Doctor Availability Schedule\n");
    for entry in entries {
        text.push_str(&format!("  {}\n", entry.name()));
        for (day, time) in entry.rows() {
            text.push_str(&format!("    {day}: {time}\n"));
        }
    }
    text
}

fn render_doctors(flow: &AppFlow) -> String {
    let mut text = String::from("Doctors\n");
    for doctor in flow.config().doctors() {
        text.push_str(&format!(
            "  {}: {}, {} (available {})\n",
            doctor.id,
            doctor.name,
            doctor.specialty,
            doctor.availability.join(", ")
        ));
    }
    text
}

fn render_slots(flow: &AppFlow) -> String {
    let draft = flow.desk().draft().clone();
    let slots = flow.desk().available_slots(&draft.date, &draft.doctor_id);
    format!("Available slots: {}\n", slots.join(", "))
}

fn help_text() -> String {
    let mut text = String::from("Commands:\n");
    for (usage, summary) in [
        ("name <text>", "set the patient name"),
        ("age <years>", "set the patient age"),
        ("gender <Female|Male|Other>", "select a gender"),
        ("symptom <label>", "toggle a symptom checkbox"),
        ("other <text>", "set the free-text symptom"),
        ("submit", "submit the intake form"),
        ("clear", "reset the intake form"),
        ("show", "show the intake form"),
        ("patients", "list patient records"),
        ("edit <id>", "edit a patient record"),
        ("delete <id>", "delete a patient record"),
        ("filter <text>", "filter the schedule by doctor name"),
        ("schedule", "show the availability schedule"),
        ("doctors", "show the doctor roster"),
        ("slots", "show bookable time slots"),
        ("date <YYYY-MM-DD>", "set the appointment date"),
        ("time <slot>", "select a time slot"),
        ("doctor <id>", "select a doctor"),
        ("book", "submit the booking form"),
        ("json", "dump the full state as JSON"),
        ("quit", "leave"),
    ] {
        text.push_str(&format!("  {usage:<28} {summary}\n"));
    }
    text
}
