use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use roundup::Result;
use std::io;

#[derive(Parser)]
#[command(name = "roundup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Weekly issue triage and backlog planning", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk each assignee's open issues and record progress
    Update {
        /// Also collect a free-text note for every issue
        #[arg(short, long)]
        notes: bool,
    },

    /// Create a task for the cycle starting this week
    New,

    /// Populate the backlog with dated tasks and inferred ordering
    Populate,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Update { notes } => {
            println!("{}", "🔄 Triaging open issues...".cyan());
            roundup::cli::update::run(notes)
        }

        Commands::New => {
            println!("{}", "✨ Creating cycle tasks...".cyan());
            roundup::cli::new::run()
        }

        Commands::Populate => {
            println!("{}", "📦 Populating the backlog...".cyan());
            roundup::cli::populate::run()
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "roundup", &mut io::stdout());
            Ok(())
        }
    }
}
