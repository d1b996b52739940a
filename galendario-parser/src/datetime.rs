use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The instant and zone an agenda page is read against. The page never
/// prints a year, so it is taken from `now` in `timezone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub now: DateTime<Utc>,
    pub timezone: Tz,
}

impl Evaluation {
    #[must_use]
    pub fn new(now: DateTime<Utc>, timezone: Tz) -> Self {
        Self { now, timezone }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.now.with_timezone(&self.timezone).year()
    }
}

struct DateRule {
    name: &'static str,
    layout: &'static str,
    parse: fn(&str, &str) -> Option<NaiveDateTime>,
}

/// Every rendering the agenda has been seen to use, tried in order.
/// Layouts get the evaluation year appended as `-%Y`.
const DATE_RULES: &[DateRule] = &[
    DateRule {
        name: "date and time",
        layout: "%d/%m às %H:%M-%Y",
        parse: with_time,
    },
    DateRule {
        name: "date and time with h separator",
        layout: "%d/%m às %Hh%M-%Y",
        parse: with_time,
    },
    DateRule {
        name: "date only",
        layout: "%d/%m-%Y",
        parse: date_only,
    },
    DateRule {
        name: "date with time to be defined",
        layout: "%d/%m às a definir-%Y",
        parse: date_only,
    },
];

fn with_time(input: &str, layout: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, layout).ok()
}

fn date_only(input: &str, layout: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(input, layout)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// chrono accepts single digit fields, the agenda always pads day, month
/// and minute to two. The hour may have one digit.
fn is_zero_padded(input: &str) -> bool {
    let fields = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>();

    match fields.as_slice() {
        [day, month] | [day, month, _] => day.len() == 2 && month.len() == 2,
        [day, month, _, minute, ..] => day.len() == 2 && month.len() == 2 && minute.len() == 2,
        _ => false,
    }
}

/// Parses the date line of a fixture, e.g. `07/05 às 19:00`.
///
/// Dates without a confirmed kickoff come back at midnight. Returns `None`
/// when no known rendering matches or the local time does not exist.
pub fn parse_date_time(input: &str, evaluation: &Evaluation) -> Option<DateTime<Tz>> {
    let input = input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

    if !is_zero_padded(&input) {
        return None;
    }

    let input = format!("{input}-{}", evaluation.year());

    let (rule, naive) = DATE_RULES
        .iter()
        .find_map(|rule| (rule.parse)(&input, rule.layout).map(|naive| (rule, naive)))?;

    log::trace!("{input:?} matched rule {:?}", rule.name);

    evaluation
        .timezone
        .from_local_datetime(&naive)
        .earliest()
}
