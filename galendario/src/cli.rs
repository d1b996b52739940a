use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use chrono_tz::{America::Sao_Paulo, Tz};
use getopts::Options;

use crate::fetch::{Filter, AGENDA_URL};
use crate::output::Format;

const DATE_FORMAT: &str = "%d/%m/%Y";

pub struct Args {
    pub url: String,
    pub tournaments: Vec<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub timezone: Tz,
    pub name: String,
    pub output: Option<PathBuf>,
    pub format: Format,
}

impl Args {
    /// One filter per requested tournament, or a single unfiltered one.
    pub fn filters(&self) -> Vec<Filter> {
        let filter = |tournament: Option<&String>| Filter {
            tournament: tournament.cloned(),
            from: self.from,
            to: self.to,
        };

        if self.tournaments.is_empty() {
            vec![filter(None)]
        } else {
            self.tournaments.iter().map(Some).map(filter).collect()
        }
    }
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "t",
        "tournaments",
        "Comma separated tournament ids, fetched one page each [Default: all]",
        "IDS",
    );
    opts.optopt("f", "from", "First day of the agenda window", "DD/MM/YYYY");
    opts.optopt("", "to", "Last day of the agenda window", "DD/MM/YYYY");
    opts.optopt(
        "z",
        "timezone",
        "IANA timezone the agenda is published in [Default: America/Sao_Paulo]",
        "TIMEZONE",
    );
    opts.optopt(
        "n",
        "name",
        "Calendar name [Default: Galendário]",
        "NAME",
    );
    opts.optopt("", "url", "Agenda page to fetch", "URL");
    opts.optopt("o", "output", "Write to FILE instead of stdout", "FILE");
    opts.optflag("j", "json", "Print the calendar as JSON instead of iCalendar");
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    match try_parse(&opts, &args) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

/// `Ok(None)` means help was requested.
fn try_parse(opts: &Options, args: &[String]) -> Result<Option<Args>, String> {
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(None);
    }

    let date = |name: &str| {
        matches
            .opt_str(name)
            .map(|value| {
                NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|err| {
                    format!("Provided value for option '{name}' is invalid: {err}")
                })
            })
            .transpose()
    };

    let from = date("from")?;
    let to = date("to")?;

    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(format!("Option 'from' ({from}) is after option 'to' ({to})"));
        }
    }

    let timezone = match matches.opt_str("timezone") {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| format!("Provided value for option 'timezone' is invalid: {name}"))?,
        None => Sao_Paulo,
    };

    let tournaments = matches
        .opt_str("tournaments")
        .map(|ids| {
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let format = if matches.opt_present("json") {
        Format::Json
    } else {
        Format::Ics
    };

    Ok(Some(Args {
        url: matches.opt_str("url").unwrap_or_else(|| AGENDA_URL.into()),
        tournaments,
        from,
        to,
        timezone,
        name: matches.opt_str("name").unwrap_or_else(|| "Galendário".into()),
        output: matches.opt_str("output").map(PathBuf::from),
        format,
    }))
}
