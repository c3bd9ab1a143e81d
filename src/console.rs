//! Line-oriented text driver over a [`WeekSchedule`].
//!
//! Accepts both the one-line commands (`add monday 09:00 Standup`) and the
//! numbered menu (`1`..`4`), which prompts for each field on its own line.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::day::Day;
use crate::error::{ScheduleError, ScheduleResult};
use crate::event::Event;
use crate::week::WeekSchedule;

const DAY_PROMPT: &str = "Enter day (SUNDAY, MONDAY, TUESDAY, etc.): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct Console {
    schedule: WeekSchedule,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: WeekSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &WeekSchedule {
        &self.schedule
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Week Scheduler (CLI) - type 'help' for commands")?;
        let mut lines = input.lines();
        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out, "Goodbye!")?;
                break;
            };
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            debug!(command = input, "console command");
            if self.execute(input, &mut lines, out)? == Flow::Quit {
                break;
            }
        }
        info!(events = self.schedule.total_events(), "console session ended");
        Ok(())
    }

    fn execute<B: BufRead, W: Write>(
        &mut self,
        input: &str,
        lines: &mut io::Lines<B>,
        out: &mut W,
    ) -> io::Result<Flow> {
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("").to_ascii_lowercase();

        match cmd.as_str() {
            "help" => print_help(out)?,
            "quit" | "exit" | "4" => {
                writeln!(out, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
            "add" => {
                let day = parts.next();
                let time = parts.next();
                let title = parts.collect::<Vec<_>>().join(" ");
                match (day, time) {
                    (Some(day), Some(time)) if !title.is_empty() => {
                        let result = self.add(day, &title, time);
                        report_add(out, result)?;
                    }
                    _ => writeln!(out, "Usage: add <day> <time> <title...>")?,
                }
            }
            "1" => {
                let Some(day) = prompt(out, lines, DAY_PROMPT)? else {
                    return Ok(Flow::Quit);
                };
                let Some(title) = prompt(out, lines, "Enter event title: ")? else {
                    return Ok(Flow::Quit);
                };
                let Some(time) = prompt(out, lines, "Enter event time: ")? else {
                    return Ok(Flow::Quit);
                };
                let result = self.add(&day, &title, time.trim());
                report_add(out, result)?;
            }
            "view" | "list" => match parts.next() {
                Some(day) => self.view(day, out)?,
                None => writeln!(out, "Usage: view <day>")?,
            },
            "2" => {
                let Some(day) = prompt(out, lines, DAY_PROMPT)? else {
                    return Ok(Flow::Quit);
                };
                self.view(&day, out)?;
            }
            "remove" => match (parts.next(), parts.next()) {
                (Some(day), Some(position)) => {
                    let result = self.remove(day, position);
                    report_remove(out, result)?;
                }
                _ => writeln!(out, "Usage: remove <day> <position>")?,
            },
            "3" => {
                let Some(day) = prompt(out, lines, DAY_PROMPT)? else {
                    return Ok(Flow::Quit);
                };
                let Some(position) = prompt(
                    out,
                    lines,
                    "Enter position of the event to remove (Starting from 0 index): ",
                )?
                else {
                    return Ok(Flow::Quit);
                };
                let result = self.remove(&day, &position);
                report_remove(out, result)?;
            }
            "clear" => match parts.next() {
                Some(day) => match resolve_day(day) {
                    Ok(day) => {
                        self.schedule.store_for(day).clear();
                        writeln!(out, "Cleared all events for {day}.")?;
                    }
                    Err(err) => writeln!(out, "Error: {err}")?,
                },
                None => writeln!(out, "Usage: clear <day>")?,
            },
            "week" => self.print_week(out)?,
            _ => writeln!(out, "Invalid choice. Type 'help' for commands.")?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, day: &str, title: &str, time: &str) -> ScheduleResult<Day> {
        let day = resolve_day(day)?;
        let event = Event::try_new(title.trim(), time)?;
        self.schedule.add(day, event)?;
        Ok(day)
    }

    fn remove(&mut self, day: &str, position: &str) -> ScheduleResult<Event> {
        let day = resolve_day(day)?;
        let position = position
            .trim()
            .parse::<usize>()
            .map_err(|_| ScheduleError::Position {
                input: position.trim().to_string(),
            })?;
        Ok(self.schedule.remove(day, position)?)
    }

    fn view<W: Write>(&self, day: &str, out: &mut W) -> io::Result<()> {
        let day = match resolve_day(day) {
            Ok(day) => day,
            Err(err) => return writeln!(out, "Error: {err}"),
        };
        let store = self.schedule.store(day);
        if store.is_empty() {
            return writeln!(out, "No events for {day}.");
        }
        writeln!(out, "Events for {day}:")?;
        for (position, event) in store.list().enumerate() {
            writeln!(out, "  {position}. {event}")?;
        }
        Ok(())
    }

    fn print_week<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (day, store) in self.schedule.iter() {
            if store.is_empty() {
                writeln!(out, "{day}: no events")?;
                continue;
            }
            writeln!(out, "{day}:")?;
            for (position, event) in store.list().enumerate() {
                writeln!(out, "  {position}. {event}")?;
            }
        }
        Ok(())
    }
}

fn resolve_day(input: &str) -> Result<Day, ScheduleError> {
    if input.trim().eq_ignore_ascii_case("today") {
        return Ok(Day::today());
    }
    Ok(input.parse::<Day>()?)
}

fn prompt<B: BufRead, W: Write>(
    out: &mut W,
    lines: &mut io::Lines<B>,
    message: &str,
) -> io::Result<Option<String>> {
    writeln!(out, "{message}")?;
    out.flush()?;
    lines.next().transpose()
}

fn report_add<W: Write>(out: &mut W, result: ScheduleResult<Day>) -> io::Result<()> {
    match result {
        Ok(_) => writeln!(out, "Event added successfully."),
        Err(err) => report_error(out, &err),
    }
}

fn report_remove<W: Write>(out: &mut W, result: ScheduleResult<Event>) -> io::Result<()> {
    match result {
        Ok(event) => writeln!(out, "Event removed: {event}"),
        Err(err) => report_error(out, &err),
    }
}

fn report_error<W: Write>(out: &mut W, err: &ScheduleError) -> io::Result<()> {
    match err {
        ScheduleError::Conflict(err) => writeln!(out, "Scheduling conflict: {err}"),
        err => writeln!(out, "Error: {err}"),
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Commands:\n  help                               Show this help\n  add    <day> <time> <title...>     Book an event (time like 09:00)\n  view   <day>                       List a day's events in time order\n  remove <day> <position>            Remove the event at a 0-based position\n  clear  <day>                       Remove every event on a day\n  week                               Show all seven days\n  quit|exit                          Exit\n\nMenu shortcuts: 1 add, 2 view, 3 remove, 4 exit.\nDays are case-insensitive; 'today' uses the local clock."
    )
}
