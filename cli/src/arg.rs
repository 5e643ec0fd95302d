// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use plaps_core::{EventColor, EventId};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn date(help: &'static str) -> Arg {
        arg!(date: [DATE]).help(help)
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event").value_parser(value_parser!(EventId))
    }

    pub fn get_id(matches: &ArgMatches) -> Result<EventId, Box<dyn Error>> {
        matches
            .get_one::<EventId>("id")
            .copied()
            .ok_or_else(|| "Event id is required".into())
    }

    pub fn title(positional: bool) -> Arg {
        if positional {
            arg!(title: <TITLE> "Title of the event")
        } else {
            arg!(title: -t --title <TITLE> "Title of the event")
        }
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn date() -> Arg {
        arg!(-d --date <DATE> "Date of the event, YYYY-MM-DD, today, tomorrow or yesterday")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn start() -> Arg {
        arg!(--start <START> "Start time of the event, HH:MM")
    }

    pub fn get_start(matches: &ArgMatches) -> Option<String> {
        matches.get_one("start").cloned()
    }

    pub fn end() -> Arg {
        arg!(--end <END> "End time of the event, HH:MM")
    }

    pub fn get_end(matches: &ArgMatches) -> Option<String> {
        matches.get_one("end").cloned()
    }

    pub fn location() -> Arg {
        arg!(-l --location <LOCATION> "Free-text location, without coordinates")
            .conflicts_with("place")
    }

    pub fn get_location(matches: &ArgMatches) -> Option<String> {
        matches.get_one("location").cloned()
    }

    pub fn place() -> Arg {
        arg!(-p --place <KEYWORD> "Search a place and use the first result as the location")
    }

    pub fn get_place(matches: &ArgMatches) -> Option<String> {
        matches.get_one("place").cloned()
    }

    pub fn clear_location() -> Arg {
        arg!(--"clear-location" "Remove the location and its coordinates")
            .conflicts_with_all(["location", "place"])
    }

    /// Only `edit` registers the flag; other commands read it as unset.
    pub fn get_clear_location(matches: &ArgMatches) -> bool {
        matches
            .try_get_one::<bool>("clear-location")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    pub fn notes() -> Arg {
        arg!(-n --notes <NOTES> "Notes of the event")
    }

    pub fn get_notes(matches: &ArgMatches) -> Option<String> {
        matches.get_one("notes").cloned()
    }

    pub fn color() -> Arg {
        arg!(--color <COLOR> "Display color of the event").value_parser(value_parser!(EventColor))
    }

    pub fn get_color(matches: &ArgMatches) -> Option<EventColor> {
        matches.get_one("color").copied()
    }
}
