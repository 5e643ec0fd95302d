// SPDX-FileCopyrightText: 2025-2026 Plaps Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use jiff::civil::Date;
use plaps_core::{Event, EventColor, EventForm, EventId, Plaps, SearchNotice};

use crate::arg::{CommonArgs, EventArgs};
use crate::config::Config;
use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, parse_date, parse_time};

/// Field edits shared by `new` and `edit`, applied to an [`EventForm`].
#[derive(Debug, Clone, Default)]
pub struct EventFields {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub place: Option<String>,
    pub clear_location: bool,
    pub notes: Option<String>,
    pub color: Option<EventColor>,
}

impl EventFields {
    fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            date: EventArgs::get_date(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            location: EventArgs::get_location(matches),
            place: EventArgs::get_place(matches),
            clear_location: EventArgs::get_clear_location(matches),
            notes: EventArgs::get_notes(matches),
            color: EventArgs::get_color(matches),
        }
    }

    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.location.is_none()
            && self.place.is_none()
            && !self.clear_location
            && self.notes.is_none()
            && self.color.is_none()
    }

    /// Applies the edits in form order: date, times, text, then location.
    ///
    /// A failed place search leaves the location as it was and prints the notice.
    async fn apply(
        self,
        form: &mut EventForm,
        today: Date,
        config: &Config,
    ) -> Result<(), Box<dyn Error>> {
        if let Some(date) = self.date {
            form.set_date(parse_date(today, &date)?);
        }
        if let Some(start) = self.start {
            form.set_start_time(parse_time(&start)?)?;
        }
        if let Some(end) = self.end {
            form.set_end_time(parse_time(&end)?)?;
        }
        if let Some(title) = self.title {
            form.set_title(title);
        }
        if let Some(notes) = self.notes {
            form.set_notes(notes);
        }
        if let Some(color) = self.color {
            form.set_color(color);
        }

        if self.clear_location {
            form.clear_location();
        } else if let Some(location) = self.location {
            form.clear_location();
            form.set_location(location);
        } else if let Some(keyword) = self.place {
            let finder = config.place_finder()?;
            let results = finder.search(&keyword).await;
            match results.places.first() {
                Some(place) => {
                    tracing::debug!(place = %place.place_name, "using first search result");
                    form.apply_place(place);
                }
                None => println!("{} {}", "Notice:".yellow(), results.notice),
            }
            if let SearchNotice::Found(n @ 2..) = results.notice {
                println!("{} picked the first of {n} places", "Notice:".yellow());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub fields: EventFields,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new event")
            .arg(EventArgs::title(true))
            .arg(EventArgs::date())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::location())
            .arg(EventArgs::place())
            .arg(EventArgs::notes())
            .arg(EventArgs::color())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: EventFields::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn run(self, plaps: &mut Plaps, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let mut form = plaps.new_form(None);
        self.fields.apply(&mut form, plaps.today(), config).await?;

        let event = plaps.save(&form).await?;
        print_events(&[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: EventId,
    pub fields: EventFields,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event")
            .arg(EventArgs::id())
            .arg(EventArgs::title(false))
            .arg(EventArgs::date())
            .arg(EventArgs::start())
            .arg(EventArgs::end())
            .arg(EventArgs::location())
            .arg(EventArgs::place())
            .arg(EventArgs::clear_location())
            .arg(EventArgs::notes())
            .arg(EventArgs::color())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches)?,
            fields: EventFields::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    #[tracing::instrument(skip_all, fields(id = %self.id))]
    pub async fn run(self, plaps: &mut Plaps, config: &Config) -> Result<(), Box<dyn Error>> {
        let mut form = plaps.edit_form(self.id)?;
        if self.fields.is_empty() {
            tracing::info!("nothing to change");
        } else {
            self.fields.apply(&mut form, plaps.today(), config).await?;
        }

        let event = plaps.save(&form).await?;
        print_events(&[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: EventId,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(EventArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches)?,
        })
    }

    #[tracing::instrument(skip_all, fields(id = %self.id))]
    pub async fn run(self, plaps: &mut Plaps) -> Result<(), Box<dyn Error>> {
        if plaps.delete_event(self.id).await? {
            println!("Deleted event {}", self.id);
            Ok(())
        } else {
            Err(format!("Event not found: {}", self.id).into())
        }
    }
}

fn print_events(events: &[Event], output_format: OutputFormat, verbose: bool) {
    let formatter = EventFormatter::new()
        .with_output_format(output_format)
        .with_verbose(verbose);
    print!("{}", formatter.format(events));
}
