use clap::{Parser, Subcommand};
use medsched_core::{filter_schedule, AppFlow, BookingDesk, CoreConfig};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "medsched")]
#[command(about = "MedScheduler appointment demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the doctor roster
    Doctors {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the availability schedule
    Schedule {
        /// Case-insensitive doctor name filter
        #[arg(long, default_value = "")]
        filter: String,
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show bookable time slots for a date and doctor
    Slots {
        /// Appointment date (YYYY-MM-DD)
        date: String,
        /// Roster doctor id
        doctor_id: String,
    },
    /// Run the interactive intake and booking session
    Run,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = Arc::new(CoreConfig::builtin()?);

    match cli.command {
        Some(Commands::Doctors { json }) => {
            if json {
                println!("{}", serde_json::to_string_pretty(cfg.doctors())?);
            } else {
                for doctor in cfg.doctors() {
                    println!(
                        "{}: {}, {} (available {})",
                        doctor.id,
                        doctor.name,
                        doctor.specialty,
                        doctor.availability.join(", ")
                    );
                }
            }
        }
        Some(Commands::Schedule { filter, json }) => {
            let entries = filter_schedule(cfg.schedule(), &filter);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No doctors match '{filter}'.");
            } else {
                for entry in entries {
                    println!("{}", entry.name());
                    for (day, time) in entry.rows() {
                        println!("  {day}: {time}");
                    }
                }
            }
        }
        Some(Commands::Slots { date, doctor_id }) => {
            let desk = BookingDesk::new(cfg);
            match desk.doctor_info(&doctor_id) {
                Some(info) => {
                    println!("Slots for {info} on {date}:");
                    for slot in desk.available_slots(&date, &doctor_id) {
                        println!("  {slot}");
                    }
                }
                None => eprintln!("No doctor with id {doctor_id}"),
            }
        }
        Some(Commands::Run) => {
            let mut flow = AppFlow::new(cfg);
            medsched_cli::console::run(&mut flow)?;
        }
        None => {
            println!("Use 'medsched --help' for commands");
        }
    }

    Ok(())
}
