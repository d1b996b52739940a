use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Error, Result};

/// One scheduled match as read from the agenda page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Event {
    pub tournament: String,
    pub stadium: String,
    /// Kickoff in the page's timezone. Midnight means the time is not yet known.
    pub date_time: DateTime<Tz>,
    pub home_team: String,
    pub away_team: String,
}

impl Event {
    #[must_use]
    pub fn has_kickoff_time(&self) -> bool {
        self.date_time.time() != NaiveTime::MIN
    }

    /// Moves the event into the next year when its month is already behind
    /// `now`. Agenda pages omit the year, so a January match listed in
    /// December would otherwise land in the past.
    pub fn adjust_year(&mut self, now: DateTime<Utc>) -> Result<()> {
        let now = now.with_timezone(&self.date_time.timezone());

        if self.date_time.month() < now.month() {
            let year = self.date_time.year() + 1;
            let local = self.date_time.naive_local();

            let shifted = local.with_year(year).ok_or_else(|| {
                Error::unexpected(format!(
                    "{} has no counterpart in {year}",
                    local.date()
                ))
            })?;

            // Same rule as the date parser: earliest instant, gaps rejected.
            self.date_time = self
                .date_time
                .timezone()
                .from_local_datetime(&shifted)
                .earliest()
                .ok_or_else(|| {
                    Error::unexpected(format!("{shifted} does not exist in {}", now.timezone()))
                })?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Calendar {
    pub name: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Entry {
    pub uid: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Schedule {
    AllDay(NaiveDate),
    Timed {
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    },
}
