//! learnledger CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "learnledger",
    version,
    about = "Weekly learning scores with a momentum bonus"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ledger CSV file (overrides config and LEARNLEDGER_LEDGER)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one week and record it in the ledger
    Submit {
        /// Learner identifier
        #[arg(long, value_parser = trimmed)]
        user: String,

        /// Week number
        #[arg(long, allow_hyphen_values = true)]
        week: String,

        /// Study hours this week
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        learning_hours: String,

        /// Applied-practice hours this week
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        application_hours: String,

        /// Certificates earned this week
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        certificates: String,
    },

    /// Show a learner's recorded weeks
    History {
        #[arg(long, value_parser = trimmed)]
        user: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show a learner's progress gauge
    Progress {
        #[arg(long, value_parser = trimmed)]
        user: String,
    },

    /// Summary statistics for a learner
    Summary {
        #[arg(long, value_parser = trimmed)]
        user: String,
    },

    /// List every learner in the ledger
    Users,

    /// Write a learner's history report to disk
    Export {
        #[arg(long, value_parser = trimmed)]
        user: String,

        /// Output format: json, html, all
        #[arg(long, default_value = "html")]
        format: String,

        /// Output directory (defaults to output_dir from config)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create a starter config and an empty ledger
    Init,
}

/// Learner names are matched after trimming surrounding whitespace.
fn trimmed(raw: &str) -> Result<String, String> {
    Ok(raw.trim().to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("learnledger=info")),
        )
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context {
        config_path: cli.config,
        ledger_override: cli.ledger,
    };

    let result = match cli.command {
        Commands::Submit {
            user,
            week,
            learning_hours,
            application_hours,
            certificates,
        } => commands::submit::execute(
            &ctx,
            &user,
            &week,
            &learning_hours,
            &application_hours,
            &certificates,
        ),
        Commands::History { user, format } => commands::history::execute(&ctx, &user, &format),
        Commands::Progress { user } => commands::progress::execute(&ctx, &user),
        Commands::Summary { user } => commands::summary::execute(&ctx, &user),
        Commands::Users => commands::users::execute(&ctx),
        Commands::Export {
            user,
            format,
            output,
        } => commands::export::execute(&ctx, &user, &format, output),
        Commands::Init => commands::init::execute(&ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
