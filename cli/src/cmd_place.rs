// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use plaps_core::{CoordSystem, SearchNotice};

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::place_formatter::PlaceFormatter;
use crate::util::OutputFormat;

/// Searches places by keyword.
#[derive(Debug, Clone)]
pub struct CmdSearch {
    pub keyword: String,
    pub output_format: OutputFormat,
}

impl CmdSearch {
    pub const NAME: &str = "search";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Search places by keyword")
            .arg(arg!(keyword: <KEYWORD> "Keyword to search for").num_args(1..))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let keyword = matches
            .get_many::<String>("keyword")
            .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_default();
        Self {
            keyword,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    #[tracing::instrument(skip(config))]
    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let finder = config.place_finder()?;
        let results = finder.search(&self.keyword).await;

        match self.output_format {
            OutputFormat::Table => {
                let notice = results.notice.to_string();
                match results.notice {
                    SearchNotice::Found(_) => println!("{}", notice.green()),
                    SearchNotice::Failed(_) => println!("{}", notice.red()),
                    SearchNotice::EmptyKeyword | SearchNotice::NoResults => {
                        println!("{}", notice.yellow());
                    }
                }
                if !results.places.is_empty() {
                    print!("{}", PlaceFormatter::new(self.output_format).format(&results.places));
                }
            }
            OutputFormat::Json => {
                print!("{}", PlaceFormatter::new(self.output_format).format(&results.places));
            }
        }
        Ok(())
    }
}

/// Converts a WGS84 point to another coordinate system.
#[derive(Debug, Clone)]
pub struct CmdCoord {
    pub longitude: f64,
    pub latitude: f64,
    pub to: CoordSystem,
}

impl CmdCoord {
    pub const NAME: &str = "coord";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Transform a WGS84 coordinate to another system")
            .arg(
                arg!(longitude: <LON> "Longitude in degrees")
                    .value_parser(value_parser!(f64))
                    .allow_negative_numbers(true),
            )
            .arg(
                arg!(latitude: <LAT> "Latitude in degrees")
                    .value_parser(value_parser!(f64))
                    .allow_negative_numbers(true),
            )
            .arg(
                arg!(--to <SYSTEM> "Target coordinate system")
                    .value_parser(value_parser!(CoordSystem))
                    .default_value("KTM"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let longitude = matches
            .get_one::<f64>("longitude")
            .copied()
            .ok_or("Longitude is required")?;
        let latitude = matches
            .get_one::<f64>("latitude")
            .copied()
            .ok_or("Latitude is required")?;
        let to = matches
            .get_one::<CoordSystem>("to")
            .copied()
            .unwrap_or(CoordSystem::Katec);
        Ok(Self {
            longitude,
            latitude,
            to,
        })
    }

    #[tracing::instrument(skip(config))]
    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        let finder = config.place_finder()?;
        match finder.transform(self.longitude, self.latitude, self.to).await {
            Some(coord) => println!("{} {} {}", self.to, coord.x, coord.y),
            None => println!("{} no coordinate returned", "Notice:".yellow()),
        }
        Ok(())
    }
}
