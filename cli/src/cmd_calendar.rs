// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::civil::Date;
use plaps_core::{Event, Plaps, YearMonth};

use crate::arg::CommonArgs;
use crate::event_formatter::EventFormatter;
use crate::grid_formatter::{MonthGridFormatter, WeekStripFormatter};
use crate::util::{OutputFormat, format_date, parse_date};

/// Shows the week around a day, followed by that day's events.
#[derive(Debug, Clone)]
pub struct CmdWeek {
    pub date: Option<String>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Show the week strip and the events of a day")
            .arg(CommonArgs::date("The selected day, defaults to today"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: CommonArgs::get_date(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    /// The default command, for today.
    pub fn today() -> Self {
        Self {
            date: None,
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }

    #[tracing::instrument(skip(plaps))]
    pub async fn run(self, plaps: &mut Plaps) -> Result<(), Box<dyn Error>> {
        let selected = resolve_date(plaps, self.date.as_deref())?;
        let events = sorted(plaps.events_on(selected));

        if self.output_format == OutputFormat::Table {
            let strip = plaps.week_strip(selected)?;
            println!("{}", WeekStripFormatter::new(&strip));
            print_day_heading(selected, &events);
        }
        print_events(&events, self.output_format, self.verbose, false);
        Ok(())
    }
}

/// Shows the month grid and the events of that month.
#[derive(Debug, Clone)]
pub struct CmdMonth {
    pub month: Option<YearMonth>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show the month grid with event markers")
            .arg(
                arg!(month: [MONTH] "The month to show, YYYY-MM, defaults to the current month")
                    .value_parser(parse_month),
            )
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: matches.get_one("month").copied(),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    #[tracing::instrument(skip(plaps))]
    pub async fn run(self, plaps: &mut Plaps) -> Result<(), Box<dyn Error>> {
        let today = plaps.today();
        let month = self.month.unwrap_or_else(|| YearMonth::of(today));
        let events: Vec<Event> = plaps
            .store()
            .snapshot()
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect();
        let events = sorted(events);

        if self.output_format == OutputFormat::Table {
            let selected = if month.contains(today) {
                today
            } else {
                month.first_day()
            };
            let grid = plaps.month_grid(month, selected);
            println!("{}", MonthGridFormatter::new(&grid));
            if events.is_empty() {
                println!("{}", "No events this month".italic());
                return Ok(());
            }
        }
        print_events(&events, self.output_format, self.verbose, true);
        Ok(())
    }
}

/// Lists the events of one day.
#[derive(Debug, Clone)]
pub struct CmdDay {
    pub date: Option<String>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("List the events of a day")
            .arg(CommonArgs::date("The day to list, defaults to today"))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: CommonArgs::get_date(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    #[tracing::instrument(skip(plaps))]
    pub async fn run(self, plaps: &mut Plaps) -> Result<(), Box<dyn Error>> {
        let date = resolve_date(plaps, self.date.as_deref())?;
        let events = sorted(plaps.list_events_by_date(date).await?);

        if self.output_format == OutputFormat::Table {
            print_day_heading(date, &events);
        }
        print_events(&events, self.output_format, self.verbose, false);
        Ok(())
    }
}

fn parse_month(s: &str) -> Result<YearMonth, String> {
    s.parse::<YearMonth>().map_err(|e| e.to_string())
}

fn resolve_date(plaps: &Plaps, date: Option<&str>) -> Result<Date, Box<dyn Error>> {
    match date {
        Some(s) => parse_date(plaps.today(), s),
        None => Ok(plaps.today()),
    }
}

fn sorted(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_key(|e| (e.date, e.start_time, e.id));
    events
}

fn print_day_heading(date: Date, events: &[Event]) {
    let heading = format!("{} ({})", format_date(date), date.strftime("%A"));
    println!("{}", heading.bold());
    if events.is_empty() {
        println!("{}", "No events".italic());
    }
}

fn print_events(events: &[Event], output_format: OutputFormat, verbose: bool, with_date: bool) {
    if output_format == OutputFormat::Table && events.is_empty() {
        return;
    }
    let mut formatter = EventFormatter::new()
        .with_output_format(output_format)
        .with_verbose(verbose);
    if !with_date {
        formatter = formatter.without_date();
    }
    print!("{}", formatter.format(events));
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn event(day: i8, start: i8, id: i64) -> Event {
        Event {
            id: Some(plaps_core::EventId::new(id)),
            date: date(2025, 3, day),
            title: format!("event {id}"),
            start_time: jiff::civil::time(start, 0, 0, 0),
            end_time: jiff::civil::time(start + 1, 0, 0, 0),
            location: String::new(),
            latitude: None,
            longitude: None,
            road_address: None,
            notes: String::new(),
            color_index: 0,
        }
    }

    #[test]
    fn test_sorted_by_date_then_start() {
        let events = vec![event(11, 9, 1), event(10, 14, 2), event(10, 9, 3)];

        let ids: Vec<_> = sorted(events)
            .into_iter()
            .map(|e| e.id.unwrap().get())
            .collect();

        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-03").unwrap(), YearMonth::new(2025, 3).unwrap());
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("March").is_err());
    }
}
