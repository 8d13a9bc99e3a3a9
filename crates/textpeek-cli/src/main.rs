//! textpeek - show one block of text in a desktop window.
//!
//! The text is hidden until the "Show document text" checkbox is ticked.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use textpeek_core::{StartupError, TextContent, WindowConfig};

/// Show a block of text in a window behind a show/hide checkbox.
#[derive(Parser, Debug)]
#[command(name = "textpeek", author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// The text to display (may be empty).
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let startup = err.downcast_ref::<StartupError>();
            if matches!(startup, Some(StartupError::MissingArgument)) {
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::from(startup.map_or(1, StartupError::exit_code))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Checked before anything touches the GUI toolkit.
    let text = cli.text.ok_or(StartupError::MissingArgument)?;
    let content = TextContent::new(text);
    debug!(bytes = content.len(), "text argument received");

    textpeek_viz::start(content, &WindowConfig::default())
        .context("failed to show the document window")?;

    Ok(())
}

/// Log to stderr. Verbosity flags set the default level, `RUST_LOG`
/// directives refine it.
fn init_tracing(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::ERROR
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN // Default to less noise
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
