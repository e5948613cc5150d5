//! Command-line interface for atl-navigator.
//!
//! This module provides the CLI structure for the `atlnav` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AnalyticsCommand, ConfigCommand, FlightsCommand, GateCommand, GatesCommand, MapCommand,
    ServicesCommand, WalkCommand, WatchCommand,
};

/// atlnav - Find your way around Hartsfield-Jackson Atlanta International
///
/// Flight boards, gates, dining, lounges, walking times and live terminal
/// analytics, from the command line.
#[derive(Debug, Parser)]
#[command(name = "atlnav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the departures and arrivals boards
    Flights(FlightsCommand),

    /// List gates
    Gates(GatesCommand),

    /// Browse dining, shopping and lounges
    Services(ServicesCommand),

    /// Show or search one concourse map
    Map(MapCommand),

    /// Show a gate and the flight assigned to it
    Gate(GateCommand),

    /// Estimate walking time between two gates
    Walk(WalkCommand),

    /// Show a terminal analytics snapshot
    Analytics(AnalyticsCommand),

    /// Run the live views and log their refreshes
    Watch(WatchCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Concourse;
    use crate::search::{AirlineFilter, DirectoryFilter};
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Analytics(AnalyticsCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "atlnav");
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flights_defaults() {
        let cli = Cli::try_parse_from(["atlnav", "flights"]).unwrap();
        let Command::Flights(cmd) = cli.command else {
            panic!("expected flights command");
        };
        assert_eq!(cmd.query, "");
        assert_eq!(cmd.airline, AirlineFilter::All);
        assert!(!cmd.json);
    }

    #[test]
    fn test_parse_flights_airline() {
        let cli = Cli::try_parse_from(["atlnav", "flights", "--airline", "dl", "-q"]).unwrap();
        let Command::Flights(cmd) = cli.command else {
            panic!("expected flights command");
        };
        assert_eq!(cmd.airline, AirlineFilter::Code("DL".to_string()));
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_gates_concourse() {
        let cli = Cli::try_parse_from(["atlnav", "gates", "f", "--json"]).unwrap();
        let Command::Gates(cmd) = cli.command else {
            panic!("expected gates command");
        };
        assert_eq!(cmd.concourse, Some(Concourse::F));
        assert!(cmd.json);
    }

    #[test]
    fn test_parse_gates_rejects_unknown_concourse() {
        assert!(Cli::try_parse_from(["atlnav", "gates", "Z"]).is_err());
    }

    #[test]
    fn test_parse_services_filter() {
        let cli = Cli::try_parse_from(["atlnav", "services", "--filter", "duty_free"]).unwrap();
        let Command::Services(cmd) = cli.command else {
            panic!("expected services command");
        };
        assert_eq!(
            cmd.filter,
            DirectoryFilter::Type(crate::model::ServiceType::DutyFree)
        );
    }

    #[test]
    fn test_parse_walk() {
        let cli = Cli::try_parse_from(["atlnav", "walk", "A1", "B30"]).unwrap();
        let Command::Walk(cmd) = cli.command else {
            panic!("expected walk command");
        };
        assert_eq!(cmd.from, "A1");
        assert_eq!(cmd.to, "B30");
    }

    #[test]
    fn test_parse_watch_ticks() {
        let cli = Cli::try_parse_from(["atlnav", "watch", "--ticks", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Watch(WatchCommand { ticks: Some(3) })
        ));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["atlnav", "config", "validate", "/tmp/c.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["atlnav", "-c", "/custom/config.toml", "analytics"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let cli = Cli::try_parse_from(["atlnav", "-vv", "gates"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
