// ABOUTME: Clinicflow CLI - response-time reports and business-hours checks from exported data
// ABOUTME: Reads chat rows and clinic settings from JSON files and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow
//!
//! Usage:
//! ```bash
//! # Report for one clinic over the configured trailing window
//! clinicflow-cli response-time --messages rows.json --clinic 2c0c1a7e-0d7b-4c7e-9a59-3f4f0a1b2c3d
//!
//! # Every clinic in the export, human replies inside business hours only
//! clinicflow-cli response-time --messages rows.json --business-hours hours.json \
//!     --exclude-assistant --business-hours-only --all-time --pretty
//!
//! # Is this timestamp inside business hours?
//! clinicflow-cli check-hours --business-hours hours.json --at 2025-03-08T10:30:00-03:00
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clinicflow::config::AnalyticsConfig;
use clinicflow::logging::LoggingConfig;
use clinicflow_core::models::ClinicId;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "clinicflow-cli",
    about = "Clinicflow CRM analytics CLI",
    long_about = "Compute lead response-time metrics and check business hours from exported clinic data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute response-time metrics from a JSON export of chat rows
    ResponseTime(ResponseTimeArgs),

    /// Check whether a timestamp falls inside business hours
    CheckHours {
        /// Business-hours settings (JSON)
        #[arg(long)]
        business_hours: PathBuf,

        /// Timestamp in the clinic's timezone, ISO 8601
        #[arg(long)]
        at: String,
    },
}

#[derive(Args)]
struct ResponseTimeArgs {
    /// Chat rows (JSON array)
    #[arg(long)]
    messages: PathBuf,

    /// Business-hours settings (JSON), applied to every clinic in the export
    #[arg(long)]
    business_hours: Option<PathBuf>,

    /// Only report this clinic (default: one report per clinic found)
    #[arg(long)]
    clinic: Option<ClinicId>,

    /// Trailing window in days (default from `RESPONSE_TIME_WINDOW_DAYS`)
    #[arg(long, conflicts_with_all = ["since", "until", "all_time"])]
    days: Option<u32>,

    /// Window start, ISO 8601
    #[arg(long, requires = "until", conflicts_with = "all_time")]
    since: Option<String>,

    /// Window end (exclusive), ISO 8601
    #[arg(long, requires = "since", conflicts_with = "all_time")]
    until: Option<String>,

    /// Use every row regardless of date
    #[arg(long)]
    all_time: bool,

    /// Leave out replies from human operators
    #[arg(long)]
    exclude_human: bool,

    /// Leave out replies from the automated assistant
    #[arg(long)]
    exclude_assistant: bool,

    /// Count only replies sent inside business hours
    #[arg(long)]
    business_hours_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = AnalyticsConfig::from_env()?;
    debug!(?config, "Clinicflow CLI");

    match cli.command {
        Command::ResponseTime(args) => commands::response_time::run(&config, &args)?,
        Command::CheckHours { business_hours, at } => {
            commands::check_hours::run(&business_hours, &at)?;
        }
    }

    Ok(())
}
