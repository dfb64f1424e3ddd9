//! proctor CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod sets;

#[derive(Parser)]
#[command(name = "proctor", version, about = "Timed-exam simulator for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Conduct an exam session
    Start {
        /// Path to a .toml question set (built-in sets when omitted)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Exam variant: practice or final (interactive menu when omitted)
        #[arg(long)]
        exam: Option<String>,

        /// Directory for the audit log files
        #[arg(long, default_value = ".")]
        log_dir: PathBuf,
    },

    /// Validate question-set TOML files
    Validate {
        /// Path to a question-set file or directory
        #[arg(long)]
        questions: PathBuf,
    },

    /// List the built-in question sets
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("proctor=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Start {
            questions,
            exam,
            log_dir,
        } => commands::start::execute(questions, exam, log_dir),
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::List => commands::list::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
