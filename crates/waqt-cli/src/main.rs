use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "waqt-cli", version, about = "Waqt prayer-period day planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer timetable for today
    Times {
        #[command(subcommand)]
        action: commands::times::TimesAction,
    },
    /// Time block management
    Block {
        #[command(subcommand)]
        action: commands::block::BlockAction,
    },
    /// Today's blocks and free slots in one view
    Day {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Countdown to the next prayer
    Next {
        /// Refresh once per second until interrupted
        #[arg(long)]
        watch: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Times { action } => commands::times::run(action),
        Commands::Block { action } => commands::block::run(action),
        Commands::Day { json } => commands::day::run(json),
        Commands::Next { watch } => commands::next::run(watch),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
