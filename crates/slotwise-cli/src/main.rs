use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "slotwise", version, about = "Slotwise day-planning CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Meeting management
    Meeting {
        #[command(subcommand)]
        action: commands::meeting::MeetingAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Compute the day plan
    Plan(commands::plan::PlanArgs),
    /// Export the schedule as CSV
    Export(commands::export::ExportArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Meeting { action } => commands::meeting::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
