// src/main.rs

use anyhow::Result;
use clap::Parser;
use photosort::cli::Cli;
#[cfg(feature = "gallery")]
use photosort::cli::Commands;
use photosort::config::ConfigBuilder;
use photosort::errors::AppError;
use photosort::run;

#[cfg(feature = "gallery")]
use photosort::gallery;

// Wrapper struct to handle subcommands without breaking the library's Cli struct
#[derive(Parser)]
struct AppArgs {
    #[cfg(feature = "gallery")]
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    cli: Cli,
}

fn main() {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if cfg!(debug_assertions) {
            "photosort=debug"
        } else {
            "photosort=info"
        },
    ))
    .format_timestamp(None)
    .init();

    log::debug!("Starting photosort v{}...", env!("CARGO_PKG_VERSION"));

    let args = AppArgs::parse();

    // --- Handle Subcommands (Gallery) ---
    #[cfg(feature = "gallery")]
    if let Some(Commands::Gallery {
        photos_dir,
        output,
        title,
    }) = args.command
    {
        if let Err(e) = run_gallery(photos_dir, output, title) {
            report_and_exit(&e);
        }
        return;
    }

    // --- Configuration & Execution ---
    if let Err(e) = run_sort(args.cli) {
        report_and_exit(&e);
    }
}

fn run_sort(cli: Cli) -> Result<()> {
    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built: {config:?}");

    let outcome = run(&config)?;
    if !outcome.skipped.is_empty() {
        log::warn!(
            "{} file(s) left in '{}' for manual triage",
            outcome.skipped.len(),
            config.source_dir.display()
        );
    }
    Ok(())
}

#[cfg(feature = "gallery")]
fn run_gallery(photos_dir: String, output: String, title: String) -> Result<()> {
    let config = gallery::GalleryConfig {
        photos_dir: photos_dir.into(),
        output_file: output.into(),
        title,
    };
    gallery::generate(&config)?;
    Ok(())
}

/// Maps categorized errors to exit codes: a missing input directory is a
/// usage-level failure (2), everything else is a runtime failure (1).
fn report_and_exit(error: &anyhow::Error) -> ! {
    match error.downcast_ref::<AppError>() {
        Some(AppError::SourceDirUnreadable { .. }) => {
            eprintln!("photosort: {error}");
            std::process::exit(2);
        }
        #[cfg(feature = "gallery")]
        Some(AppError::PhotosDirMissing { .. }) => {
            eprintln!("photosort: {error}");
            std::process::exit(2);
        }
        _ => {
            eprintln!("Error: {error:#}");
            std::process::exit(1);
        }
    }
}
