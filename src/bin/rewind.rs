//! # rewind CLI - Minimal file versioning
//!
//! The thin presentation layer over the rewind library: argument parsing,
//! console formatting, and exit-code mapping. All versioning semantics live
//! in the library.
//!
//! ## Usage
//! ```bash
//! # Initialize rewind in the current directory
//! rewind init
//!
//! # Track a file (creates a new version)
//! rewind add notes.txt -m "first draft"
//!
//! # Snapshot the current content of the tracked set
//! rewind commit notes.txt
//!
//! # Restore the files of version 1
//! rewind checkout 1
//!
//! # List all versions, or only the last three
//! rewind history
//! rewind history --last 3
//!
//! # Show the full message of the latest (or a specific) version
//! rewind version
//! rewind version 2
//! ```

use clap::{Parser, Subcommand};
use colored::*;
use rewind::{
    AddOutcome, CommitOutcome, DetachOutcome, Repository, Result, RewindError, VersionId,
};
use std::path::PathBuf;

/// rewind CLI - track individual files and restore any earlier version
#[derive(Parser)]
#[command(name = "rewind")]
#[command(version)]
#[command(about = "Minimal file versioning - snapshot tracked files and rewind to any version")]
#[command(long_about = None)]
struct Cli {
    /// Working directory (defaults to current)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a repository in the working directory
    Init,

    /// Start tracking a file (creates a new version)
    Add {
        /// File to track, relative to the working directory
        file: PathBuf,

        /// Extra message line for the new version
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Stop tracking a file (creates a new version)
    Detach {
        /// Tracked file to detach
        file: PathBuf,

        /// Extra message line for the new version
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Snapshot the tracked set because a tracked file changed
    Commit {
        /// Tracked file whose change prompted the snapshot
        file: PathBuf,

        /// Extra message line for the new version
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Restore working copies from a stored version
    Checkout {
        /// Version number to restore
        version: VersionId,
    },

    /// List version summaries
    History {
        /// Show only the last N versions, newest first
        #[arg(short, long)]
        last: Option<u64>,
    },

    /// Show the full message of the latest or a specific version
    Version {
        /// Version number (defaults to latest)
        version: Option<VersionId>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // Disable colors if needed
    if std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    }

    // Run command
    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

/// Map each failure category to a distinct exit status
///
/// Usage errors are reported by clap itself (status 2); success and the
/// informational already-tracked / not-tracked outcomes exit 0.
fn exit_code(err: &RewindError) -> i32 {
    match err {
        RewindError::NotInitialized(_) => 3,
        RewindError::AlreadyInitialized(_) => 4,
        RewindError::FileNotFound(_) => 5,
        RewindError::InvalidVersion { .. } => 6,
        RewindError::Io(_) | RewindError::Json(_) | RewindError::CorruptState(_) => 10,
    }
}

/// Main command runner
fn run(cli: Cli) -> Result<()> {
    let working_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Init => cmd_init(working_dir),
        Commands::Add { file, message } => cmd_add(working_dir, file, message),
        Commands::Detach { file, message } => cmd_detach(working_dir, file, message),
        Commands::Commit { file, message } => cmd_commit(working_dir, file, message),
        Commands::Checkout { version } => cmd_checkout(working_dir, version),
        Commands::History { last } => cmd_history(working_dir, last),
        Commands::Version { version } => cmd_version(working_dir, version),
    }
}

/// Initialize a repository in the working directory
fn cmd_init(working_dir: PathBuf) -> Result<()> {
    let repo = Repository::init(&working_dir)?;

    println!("{} Initialized rewind repository", "✓".green().bold());
    println!(
        "  Control directory: {}",
        repo.working_dir()
            .join(rewind::CONTROL_DIR)
            .display()
            .to_string()
            .cyan()
    );
    println!("\nNext steps:");
    println!("  - Track a file: {}", "rewind add <file>".yellow());
    println!("  - View history: {}", "rewind history".yellow());

    Ok(())
}

/// Track a file
fn cmd_add(working_dir: PathBuf, file: PathBuf, message: Option<String>) -> Result<()> {
    let mut repo = Repository::open(&working_dir)?;

    match repo.add(&file, message.as_deref())? {
        AddOutcome::Added { version } => {
            println!(
                "{} File {} added (version {})",
                "✓".green().bold(),
                file.display().to_string().cyan(),
                version.to_string().yellow().bold()
            );
        }
        AddOutcome::AlreadyTracked => {
            println!(
                "File {} is already tracked.",
                file.display().to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Stop tracking a file
fn cmd_detach(working_dir: PathBuf, file: PathBuf, message: Option<String>) -> Result<()> {
    let mut repo = Repository::open(&working_dir)?;

    match repo.detach(&file, message.as_deref())? {
        DetachOutcome::Detached { version } => {
            println!(
                "{} File {} detached (version {})",
                "✓".green().bold(),
                file.display().to_string().cyan(),
                version.to_string().yellow().bold()
            );
        }
        DetachOutcome::NotTracked => {
            println!(
                "File {} is not tracked.",
                file.display().to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Snapshot the tracked set
fn cmd_commit(working_dir: PathBuf, file: PathBuf, message: Option<String>) -> Result<()> {
    let repo = Repository::open(&working_dir)?;

    match repo.commit(&file, message.as_deref())? {
        CommitOutcome::Committed { version } => {
            println!(
                "{} File {} committed (version {})",
                "✓".green().bold(),
                file.display().to_string().cyan(),
                version.to_string().yellow().bold()
            );
        }
        CommitOutcome::NotTracked => {
            println!(
                "File {} is not tracked.",
                file.display().to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Restore working copies from a stored version
fn cmd_checkout(working_dir: PathBuf, version: VersionId) -> Result<()> {
    let repo = Repository::open(&working_dir)?;
    let result = repo.checkout(version)?;

    println!(
        "{} Version {} checked out",
        "✓".green().bold(),
        version.to_string().yellow().bold()
    );
    println!("  Files restored: {}", result.files_restored.to_string().cyan());
    if result.files_skipped > 0 {
        println!(
            "  Without stored copy: {}",
            result.files_skipped.to_string().yellow()
        );
    }

    Ok(())
}

/// List version summaries
fn cmd_history(working_dir: PathBuf, last: Option<u64>) -> Result<()> {
    let repo = Repository::open(&working_dir)?;

    let entries = match last {
        Some(n) => repo.history_last(n)?,
        None => repo.history()?,
    };

    for entry in &entries {
        println!(
            "{}: {}",
            entry.version.to_string().yellow().bold(),
            entry.summary
        );
    }

    Ok(())
}

/// Show the full message of a version
fn cmd_version(working_dir: PathBuf, version: Option<VersionId>) -> Result<()> {
    let repo = Repository::open(&working_dir)?;
    let detail = repo.version_detail(version)?;

    println!(
        "{} {}",
        "Version:".bold(),
        detail.version.to_string().yellow().bold()
    );
    println!("{}", detail.message);

    Ok(())
}
