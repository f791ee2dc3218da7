//! Bibliotek CLI - command-line front end for the digital library

mod commands;

use anyhow::Result;
use bibliotek_client::{CatalogClient, DEFAULT_BACKEND};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate the timeout argument (must be at least 1 second)
fn parse_timeout(s: &str) -> Result<u64, String> {
    let n: u64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("timeout must be at least 1 second".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bibliotek")]
#[command(author, version, about = "Browse and read books from a library catalog", long_about = None)]
struct Cli {
    /// Catalog service base URL
    #[arg(long, global = true, default_value = DEFAULT_BACKEND)]
    backend: String,

    /// Request timeout in seconds (must be at least 1)
    #[arg(long, global = true, default_value = "6", value_parser = parse_timeout)]
    timeout: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books in the catalog
    List {
        /// Only show books in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read a book interactively
    Read {
        /// Book identifier
        id: String,

        /// Start at this page instead of the cover
        #[arg(short, long)]
        page: Option<i64>,
    },

    /// Render one page of a book as an HTML fragment
    Render {
        /// Book identifier
        id: String,

        /// Page number (1-based)
        #[arg(short, long)]
        page: usize,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Log in to the library
    Login {
        #[command(subcommand)]
        role: LoginRole,
    },

    /// Show admin dashboard statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum LoginRole {
    /// Log in as a student
    Student {
        #[arg(long)]
        name: String,

        #[arg(long)]
        roll_no: String,

        #[arg(long)]
        department: String,

        #[arg(long)]
        year: String,
    },

    /// Log in as an administrator
    Admin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bibliotek_cli=debug,bibliotek_client=debug,bibliotek_core=debug"
    } else {
        "bibliotek_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = CatalogClient::with_timeout(&cli.backend, Duration::from_secs(cli.timeout))?;
    tracing::debug!(backend = %cli.backend, timeout_secs = cli.timeout, "catalog client ready");

    match cli.command {
        Commands::List { category, json } => commands::list(&client, category.as_deref(), json),

        Commands::Read { id, page } => commands::read(&client, &id, page),

        Commands::Render { id, page, output } => {
            commands::render(&client, &id, page, output.as_deref())
        }

        Commands::Login { role } => match role {
            LoginRole::Student {
                name,
                roll_no,
                department,
                year,
            } => commands::login_student(&client, name, roll_no, department, year),

            LoginRole::Admin { username, password } => {
                commands::login_admin(&client, username, password)
            }
        },

        Commands::Stats { json } => commands::stats(&client, json),
    }
}
