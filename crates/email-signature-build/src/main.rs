//! Email signature build — entry point.

mod config;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;

use email_signature::{
    destination_url, extract_icons, read_input, BuildReport, IconReference, IconStatus,
    SignatureBuild,
};

use crate::config::{resolve_config, BuildArgs};

#[derive(Parser)]
#[command(
    name = "email-signature-build",
    about = "Localize the signature's hosted icons as PNG assets and rewrite the HTML to the self-hosted copies",
    version
)]
struct Cli {
    #[command(flatten)]
    build: BuildArgs,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, convert, rewrite, and save (default).
    Build,

    /// Print the icons that would be localized as JSON. No downloads, no writes.
    Plan,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

/// Output of `plan`.
#[derive(Serialize)]
struct Plan<'a> {
    input: String,
    icon_count: usize,
    icons: Vec<PlanEntry<'a>>,
}

#[derive(Serialize)]
struct PlanEntry<'a> {
    #[serde(flatten)]
    icon: &'a IconReference,
    destination_url: String,
    asset: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            let config = resolve_config(&cli.build);
            println!("Email Signature Build Process");
            println!("═══════════════════════════════════════");

            let result = match SignatureBuild::new(config) {
                Ok(build) => build.run().await,
                Err(e) => Err(e),
            };

            match result {
                Ok(report) => print_summary(&report),
                Err(e) => {
                    tracing::error!("Build failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Plan => {
            let config = resolve_config(&cli.build);
            let html = read_input(&config).await?;
            let icons = extract_icons(&html, &config)?;
            let plan = Plan {
                input: config.input_file.display().to_string(),
                icon_count: icons.len(),
                icons: icons
                    .iter()
                    .map(|icon| PlanEntry {
                        icon,
                        destination_url: destination_url(&icon.name, &config),
                        asset: config.assets_dir.join(icon.asset_file_name()),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                shell,
                &mut cmd,
                "email-signature-build",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

fn print_summary(report: &BuildReport) {
    println!("═══════════════════════════════════════");
    for outcome in &report.outcomes {
        match &outcome.status {
            IconStatus::Converted(path) => println!("  ✓ {}  {}", outcome.icon.name, path.display()),
            IconStatus::Failed(e) => println!("  ✗ {}  {e}", outcome.icon.name),
            IconStatus::Duplicate => println!("  - {}  (duplicate)", outcome.icon.name),
        }
    }
    println!(
        "Build complete! {} icon(s) found, {} converted, {} failed, {} URL(s) replaced.",
        report.icons.len(),
        report.converted_count(),
        report.failed_count(),
        report.replacements
    );
    let missing = report.missing_assets();
    if !missing.is_empty() {
        println!(
            "Warning: the signature references hosted PNGs that were not produced: {}",
            missing.join(", ")
        );
    }
    println!();
    println!("Next steps:");
    println!("  1. Review {}", report.output_path.display());
    println!("  2. Commit and push the PNG icons to GitHub");
    println!("  3. Test the signature in your mail client");
}
