// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use plaps_core::{APP_NAME, Plaps};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_calendar::{CmdDay, CmdMonth, CmdWeek};
use crate::cmd_event::{CmdEventDelete, CmdEventEdit, CmdEventNew};
use crate::cmd_place::{CmdCoord, CmdSearch};
use crate::config::{Config, parse_config};

/// Run the Plaps command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if let Err(e) = result {
        eprintln!("failed to install the tracing subscriber: {e}");
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Plaps - plan your days, find your places.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to week
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $PLAPS_CONFIG, then $XDG_CONFIG_HOME/plaps/config.toml \
on Linux and MacOS, %LOCALAPPDATA%/plaps/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdWeek::command())
            .subcommand(CmdMonth::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdSearch::command())
            .subcommand(CmdCoord::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdWeek::NAME, matches)) => Week(CmdWeek::from(matches)),
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)?),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)?),
            Some((CmdSearch::NAME, matches)) => Search(CmdSearch::from(matches)),
            Some((CmdCoord::NAME, matches)) => Coord(CmdCoord::from(matches)?),
            None => Week(CmdWeek::today()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the week strip and a day's events
    Week(CmdWeek),

    /// Show a month grid
    Month(CmdMonth),

    /// List the events of a day
    Day(CmdDay),

    /// Add a new event
    New(CmdEventNew),

    /// Edit an event
    Edit(CmdEventEdit),

    /// Delete an event
    Delete(CmdEventDelete),

    /// Search places by keyword
    Search(CmdSearch),

    /// Transform a coordinate
    Coord(CmdCoord),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Week(a)   => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Month(a)  => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Day(a)    => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            New(a)    => Self::run_with(config, |x, y| a.run(x, y).boxed()).await,
            Edit(a)   => Self::run_with(config, |x, y| a.run(x, y).boxed()).await,
            Delete(a) => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Search(a) => a.run(&parse_config(config).await?.1).await,
            Coord(a)  => a.run(&parse_config(config).await?.1).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Plaps, &'a Config) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(config).await?;
        let mut plaps = Plaps::new(core_config).await?;

        f(&mut plaps, &config).await?;

        plaps.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::OutputFormat;
    use plaps_core::{CoordSystem, EventColor, EventId, YearMonth};

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Week(_)));
    }

    #[test]
    fn test_parse_default_week() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        match cli.command {
            Commands::Week(cmd) => assert_eq!(cmd.date, None),
            _ => panic!("Expected Week command"),
        }
    }

    #[test]
    fn test_parse_week_with_date() {
        let cli = Cli::try_parse_from(vec!["test", "week", "2025-03-10"]).unwrap();
        match cli.command {
            Commands::Week(cmd) => assert_eq!(cmd.date.as_deref(), Some("2025-03-10")),
            _ => panic!("Expected Week command"),
        }
    }

    #[test]
    fn test_parse_month() {
        let args = vec!["test", "month", "2025-03", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Month(cmd) => {
                assert_eq!(cmd.month, Some(YearMonth::new(2025, 3).unwrap()));
                assert_eq!(cmd.output_format, OutputFormat::Json);
            }
            _ => panic!("Expected Month command"),
        }
    }

    #[test]
    fn test_parse_month_invalid() {
        assert!(Cli::try_parse_from(vec!["test", "month", "2025-13"]).is_err());
    }

    #[test]
    fn test_parse_day() {
        let cli = Cli::try_parse_from(vec!["test", "day", "tomorrow", "-v"]).unwrap();
        match cli.command {
            Commands::Day(cmd) => {
                assert_eq!(cmd.date.as_deref(), Some("tomorrow"));
                assert!(cmd.verbose);
            }
            _ => panic!("Expected Day command"),
        }
    }

    #[test]
    fn test_parse_new() {
        let args = vec![
            "test", "new", "Standup", "--date", "2025-03-10", "--start", "09:00", "--end",
            "10:00", "--color", "green",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::New(cmd) => {
                assert_eq!(cmd.fields.title.as_deref(), Some("Standup"));
                assert_eq!(cmd.fields.date.as_deref(), Some("2025-03-10"));
                assert_eq!(cmd.fields.start.as_deref(), Some("09:00"));
                assert_eq!(cmd.fields.end.as_deref(), Some("10:00"));
                assert_eq!(cmd.fields.color, Some(EventColor::Green));
                assert!(!cmd.fields.clear_location);
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_parse_new_with_location_leaves_clear_unset() {
        let args = vec!["test", "new", "Lunch", "-l", "Cafe"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::New(cmd) => {
                assert_eq!(cmd.fields.location.as_deref(), Some("Cafe"));
                assert!(!cmd.fields.clear_location);
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_parse_new_rejects_clear_location() {
        let args = vec!["test", "new", "Lunch", "--clear-location"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_add_alias() {
        let cli = Cli::try_parse_from(vec!["test", "add", "Lunch"]).unwrap();
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn test_parse_new_requires_title() {
        assert!(Cli::try_parse_from(vec!["test", "new"]).is_err());
    }

    #[test]
    fn test_parse_new_location_conflicts_with_place() {
        let args = vec!["test", "new", "Lunch", "-l", "Cafe", "-p", "Gangnam"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_edit() {
        let args = vec!["test", "edit", "7", "-t", "Retro", "--clear-location"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Edit(cmd) => {
                assert_eq!(cmd.id, EventId::new(7));
                assert_eq!(cmd.fields.title.as_deref(), Some("Retro"));
                assert!(cmd.fields.clear_location);
            }
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_parse_edit_invalid_id() {
        assert!(Cli::try_parse_from(vec!["test", "edit", "abc"]).is_err());
    }

    #[test]
    fn test_parse_delete() {
        let cli = Cli::try_parse_from(vec!["test", "rm", "3"]).unwrap();
        match cli.command {
            Commands::Delete(cmd) => assert_eq!(cmd.id, EventId::new(3)),
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_parse_search_joins_words() {
        let cli = Cli::try_parse_from(vec!["test", "search", "Gangnam", "Station"]).unwrap();
        match cli.command {
            Commands::Search(cmd) => assert_eq!(cmd.keyword, "Gangnam Station"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_parse_coord() {
        let args = vec!["test", "coord", "127.0276", "37.4979", "--to", "wcongnamul"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Coord(cmd) => {
                assert_eq!(cmd.longitude, 127.0276);
                assert_eq!(cmd.latitude, 37.4979);
                assert_eq!(cmd.to, CoordSystem::Wcongnamul);
            }
            _ => panic!("Expected Coord command"),
        }
    }

    #[test]
    fn test_parse_coord_defaults_to_katec() {
        let cli = Cli::try_parse_from(vec!["test", "coord", "127.0", "37.5"]).unwrap();
        match cli.command {
            Commands::Coord(cmd) => assert_eq!(cmd.to, CoordSystem::Katec),
            _ => panic!("Expected Coord command"),
        }
    }
}
