use chrono::{Datelike, Duration};
use sha2::{Digest, Sha256};

use crate::{Calendar, Entry, Event, Schedule};

const MATCH_HOURS: i64 = 2;

impl Calendar {
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Appends one entry per event, keeping the events' order.
    pub fn add_events(&mut self, events: &[Event]) {
        self.entries.extend(events.iter().map(Entry::from));
    }
}

impl From<&Event> for Entry {
    fn from(event: &Event) -> Self {
        let schedule = if event.has_kickoff_time() {
            Schedule::Timed {
                start: event.date_time,
                end: event.date_time + Duration::hours(MATCH_HOURS),
            }
        } else {
            Schedule::AllDay(event.date_time.date_naive())
        };

        Self {
            uid: uid(event),
            title: format!("{} vs {}", event.home_team, event.away_team),
            location: event.stadium.clone(),
            description: event.tournament.clone(),
            schedule,
        }
    }
}

/// Stable id of a fixture. Kickoff time and stadium are left out so the
/// entry keeps its id when either is confirmed or changed later.
#[must_use]
pub fn uid(event: &Event) -> String {
    let seed = format!(
        "{}-{}-{}:{}:{}:{}",
        event.date_time.year(),
        event.date_time.month(),
        event.date_time.day(),
        event.tournament,
        event.home_team,
        event.away_team,
    );

    hex::encode(Sha256::digest(seed.as_bytes()))
}
