// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Build tasks for webpane development.
//!
//! Usage:
//!   cargo xtask vendor check
//!   cargo xtask vendor sync --only webview

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod vendor;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "webpane development tasks")]
struct Cli {
    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify or materialize the vendored native libraries
    Vendor {
        #[command(subcommand)]
        action: VendorAction,
    },
}

#[derive(Subcommand)]
enum VendorAction {
    /// Check vendored files byte-for-byte against their pinned upstream
    Check {
        /// Restrict to a single library under vendor/
        #[arg(long)]
        only: Option<String>,
    },
    /// Download vendored files from their pinned upstream
    Sync {
        /// Restrict to a single library under vendor/
        #[arg(long)]
        only: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let root = workspace_root()?;
    match cli.command {
        Commands::Vendor { action } => match action {
            VendorAction::Check { only } => vendor::check(&root, only.as_deref()),
            VendorAction::Sync { only } => vendor::sync(&root, only.as_deref()),
        },
    }
}

/// Get the workspace root directory.
pub fn workspace_root() -> Result<PathBuf> {
    let output = std::process::Command::new("cargo")
        .args(["locate-project", "--workspace", "--message-format=plain"])
        .output()
        .context("Failed to run cargo locate-project")?;

    let path = String::from_utf8(output.stdout)
        .context("Invalid UTF-8 in cargo output")?
        .trim()
        .to_string();

    PathBuf::from(path)
        .parent()
        .map(|p| p.to_path_buf())
        .context("Failed to get workspace root")
}
