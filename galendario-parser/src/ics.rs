use std::io;

use chrono::{DateTime, TimeZone, Utc};
use ics::{
    components::Property,
    escape_text,
    parameters::Value,
    properties::{Description, DtEnd, DtStart, Location, Summary},
};

use crate::{Calendar, Entry, Schedule};

const PRODID: &str = "-//galendario//galendario//PT";

fn utc_stamp<T: TimeZone>(instant: &DateTime<T>) -> String {
    instant
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%SZ")
        .to_string()
}

impl Calendar {
    /// `stamp` is written as the `DTSTAMP` of every event.
    #[must_use]
    pub fn to_ics(&self, stamp: DateTime<Utc>) -> ics::ICalendar<'_> {
        let mut icalendar = ics::ICalendar::new("2.0", PRODID);
        icalendar.push(Property::new("X-WR-CALNAME", escape_text(self.name.as_str())));

        let stamp = utc_stamp(&stamp);
        for entry in &self.entries {
            icalendar.add_event(entry.to_ics(stamp.clone()));
        }

        icalendar
    }

    pub fn write_ics<W: io::Write>(&self, stamp: DateTime<Utc>, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self.to_ics(stamp))
    }
}

impl Entry {
    #[must_use]
    pub fn to_ics(&self, stamp: String) -> ics::Event<'_> {
        let mut ics_event = ics::Event::new(self.uid.as_str(), stamp);

        match self.schedule {
            Schedule::AllDay(date) => {
                let mut start = DtStart::new(date.format("%Y%m%d").to_string());
                start.add(Value::DATE);
                ics_event.push(start);
            }
            Schedule::Timed { start, end } => {
                ics_event.push(DtStart::new(utc_stamp(&start)));
                ics_event.push(DtEnd::new(utc_stamp(&end)));
            }
        }

        ics_event.push(Summary::new(escape_text(self.title.as_str())));
        ics_event.push(Location::new(escape_text(self.location.as_str())));
        ics_event.push(Description::new(escape_text(self.description.as_str())));

        ics_event
    }
}
