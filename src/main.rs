use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medsched_cli::console;
use medsched_core::{AppFlow, CoreConfig};

/// Main entry point for the MedScheduler demo application
///
/// Resolves the built-in reference data, then runs the interactive console
/// session: intake form first, booking once intake completes. All state is
/// in memory and discarded on exit.
///
/// # Environment Variables
/// - `RUST_LOG`: tracing filter directives (default: "medsched=info")
///
/// # Returns
/// * `Ok(())` - If the session ends normally
/// * `Err(anyhow::Error)` - If startup or terminal I/O fails
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("medsched=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Arc::new(CoreConfig::builtin()?);
    tracing::info!(
        doctors = cfg.doctors().len(),
        slots = cfg.time_slots().len(),
        "++ Starting MedScheduler console"
    );

    let mut flow = AppFlow::new(cfg);
    console::run(&mut flow)?;

    Ok(())
}
