//! Turns the club's "Calendário de Jogos" agenda page into calendar entries.

mod calendar;
mod datetime;
mod document;
mod error;
mod normalize;
mod parser;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use calendar::uid;
pub use datetime::{parse_date_time, Evaluation};
pub use document::{Node, Path};
pub use error::{Error, Result};
pub use parser::{extract_events, parse_events, read_events};
pub use structs::{Calendar, Entry, Event, Schedule};
