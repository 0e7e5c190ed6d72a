use clap::Parser;
use coinvend::application::config::MachineConfig;
use coinvend::application::machine::VendingMachine;
use coinvend::domain::ports::{VendingPort, VendingPortBox};
use coinvend::domain::state::MachineState;
use coinvend::infrastructure::in_memory::SharedMachine;
use coinvend::interfaces::csv::event_reader::{Event, EventReader};
use coinvend::interfaces::csv::state_writer::StateWriter;
use coinvend::interfaces::json::machine_config::load_config;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Customer events CSV file (action, coin, weight, size, product)
    events: PathBuf,

    /// Machine configuration JSON (inventory and change loadout).
    /// Defaults to cola, chips and candy with an empty change vault.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => load_config(path).into_diagnostic()?,
        None => MachineConfig::default(),
    };
    let machine: VendingPortBox = Box::new(SharedMachine::new(
        VendingMachine::from_config(config).into_diagnostic()?,
    ));

    let file = File::open(cli.events).into_diagnostic()?;
    let reader = EventReader::new(file);

    let stdout = io::stdout();
    let mut writer = StateWriter::new(stdout.lock());

    for (index, event_result) in reader.events().enumerate() {
        let step = index + 1;
        match event_result {
            Ok(event) => {
                let action = event.action();
                match apply(machine.as_ref(), event).await {
                    Ok(state) => writer.write_state(step, action, &state).into_diagnostic()?,
                    Err(e) => eprintln!("Error processing event {}: {}", step, e),
                }
            }
            Err(e) => {
                eprintln!("Error reading event {}: {}", step, e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

async fn apply(machine: &dyn VendingPort, event: Event) -> coinvend::error::Result<MachineState> {
    match event {
        Event::Insert(token) => Ok(machine.insert_coin(token).await),
        Event::Select(product) => machine.select_product(&product).await,
        Event::Return => Ok(machine.return_coins().await),
        Event::Display => Ok(MachineState::display_only(machine.check_display().await)),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();
}
