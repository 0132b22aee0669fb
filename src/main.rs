//! Quick Capture - Main Entry Point
//!
//! This is the main entry point for the quick-capture command line tool.
//! The actual implementation is in the `quick_capture` library.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use mcp_attr::server::serve_stdio;
use quick_capture::{OutputFormat, ParseOptions, QuickCaptureHandler, capture, formatting};
use tracing_subscriber::EnvFilter;

/// Quick Capture - turn one line of text into a structured task
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show how a line of text would be captured
    Parse {
        /// Text to parse (e.g., "Submit report tomorrow 5pm #work !high")
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Reference date for relative expressions (YYYY-MM-DD, default: local date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output format: text, json or toml
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the task draft for a line of text
    Capture {
        /// Text to capture
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Reference date for relative expressions (YYYY-MM-DD, default: local date)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output format: text, json or toml
        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },
    /// List the supported syntax
    Hints,
    /// Serve the parser as an MCP server on stdio
    Serve {
        /// Pin the reference date for every request (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

/// Log to stderr so stdout stays reserved for results and the MCP transport.
/// Verbosity follows RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_tracing();

    match args.command {
        Command::Parse {
            text,
            today,
            format,
        } => {
            let options = ParseOptions {
                reference_date: today,
            };
            let task = capture::parse_task_input_with(&text.join(" "), &options);
            println!("{}", formatting::render_parsed(&task, format)?);
        }
        Command::Capture {
            text,
            today,
            format,
        } => {
            let options = ParseOptions {
                reference_date: today,
            };
            let Some(draft) = capture::capture_with(&text.join(" "), &options) else {
                bail!("Nothing to capture: input is empty");
            };
            println!("{}", formatting::render_draft(&draft, format)?);
        }
        Command::Hints => {
            print!("{}", formatting::format_hints(quick_capture::parsing_hints()));
        }
        Command::Serve { today } => {
            let handler = QuickCaptureHandler::new(today);
            serve_stdio(handler).await?;
        }
    }
    Ok(())
}
