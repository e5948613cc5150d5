//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::model::Concourse;
use crate::search::{AirlineFilter, DirectoryFilter};

/// Flight board command arguments.
#[derive(Debug, Args)]
pub struct FlightsCommand {
    /// Match flight number, city or gate
    #[arg(long, default_value = "")]
    pub query: String,

    /// Airline IATA code, or ALL
    #[arg(short, long, default_value = "ALL")]
    pub airline: AirlineFilter,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Gates command arguments.
#[derive(Debug, Args)]
pub struct GatesCommand {
    /// Only list gates on this concourse
    pub concourse: Option<Concourse>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Services directory command arguments.
#[derive(Debug, Args)]
pub struct ServicesCommand {
    /// Match name or concourse code
    #[arg(long, default_value = "")]
    pub query: String,

    /// Category: ALL, RESTAURANT, CAFE, BAR, SHOP, DUTY_FREE or LOUNGE
    #[arg(short, long, default_value = "ALL")]
    pub filter: DirectoryFilter,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Terminal map command arguments.
#[derive(Debug, Args)]
pub struct MapCommand {
    /// Concourse to show
    pub concourse: Concourse,

    /// Search the concourse instead of listing every marker
    #[arg(long)]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Gate details command arguments.
#[derive(Debug, Args)]
pub struct GateCommand {
    /// Gate number, e.g. A17
    pub number: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Walking time command arguments.
#[derive(Debug, Args)]
pub struct WalkCommand {
    /// Starting gate
    pub from: String,

    /// Destination gate
    pub to: String,
}

/// Analytics command arguments.
#[derive(Debug, Args)]
pub struct AnalyticsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Watch command arguments.
#[derive(Debug, Args)]
pub struct WatchCommand {
    /// Exit after this many feed refreshes
    #[arg(short, long)]
    pub ticks: Option<u64>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        file: Option<PathBuf>,
    },
}
