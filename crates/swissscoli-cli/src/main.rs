use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "swissscoli", version, about = "SwissScoli physiotherapy tracker")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's progress and the current week
    Today,
    /// Monday-first view of the current week
    Week,
    /// Browse the exercise catalog
    Exercises {
        #[command(subcommand)]
        action: commands::exercises::ExercisesAction,
    },
    /// Mark an exercise done for today, or undo it
    Toggle {
        /// Exercise ID
        id: u32,
    },
    /// All-time statistics
    Stats,
    /// Achievement list
    Achievements,
    /// Run the countdown timer for an exercise
    Timer {
        /// Exercise ID
        id: u32,
    },
    /// Delete all progress data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let out = commands::Output { json: cli.json };
    let result = match cli.command {
        Commands::Today => commands::progress::today(out),
        Commands::Week => commands::progress::week(out),
        Commands::Exercises { action } => commands::exercises::run(action, out),
        Commands::Toggle { id } => commands::progress::toggle(id, out),
        Commands::Stats => commands::progress::stats(out),
        Commands::Achievements => commands::progress::achievements(out),
        Commands::Timer { id } => commands::timer::run(id, out),
        Commands::Reset { yes } => commands::reset::run(yes, out),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
