use std::io::Read;

use scraper::Html;

use crate::datetime::{parse_date_time, Evaluation};
use crate::document::{Node, Path};
use crate::{normalize, Error, Event, Result};

const CALENDAR_TITLE: &str = "calendário de jogos";

/// Raw strings of one fixture block, before parsing and normalization.
#[derive(Debug)]
struct Fields {
    date: String,
    stadium: String,
    tournament: String,
    home_team: String,
    away_team: String,
}

/// Extracts upcoming fixtures from an agenda page, oldest first.
pub fn parse_events<S: AsRef<str>>(html: S, evaluation: &Evaluation) -> Result<Vec<Event>> {
    let html = Html::parse_document(html.as_ref());
    extract_events(&html.root_element(), evaluation)
}

pub fn read_events<R: Read>(mut reader: R, evaluation: &Evaluation) -> Result<Vec<Event>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_events(String::from_utf8_lossy(&bytes), evaluation)
}

/// Runs the whole pipeline over an already parsed document.
///
/// Fails on the first fixture that breaks the expected markup; no events
/// are returned in that case.
pub fn extract_events<N: Node>(document: &N, evaluation: &Evaluation) -> Result<Vec<Event>> {
    validate_page(document)?;

    let fixtures = locate_fixtures(document);
    log::debug!("found {} upcoming fixtures", fixtures.len());

    let mut events = fixtures
        .iter()
        .map(|fixture| parse_fixture(extract_fields(fixture)?, evaluation))
        .collect::<Result<Vec<_>>>()?;

    // The page lists fixtures newest first.
    events.reverse();

    for event in &mut events {
        event.adjust_year(evaluation.now)?;
    }

    if events
        .windows(2)
        .any(|pair| pair[0].date_time >= pair[1].date_time)
    {
        log::warn!("agenda page was not in descending order, events may be out of order");
    }

    Ok(events)
}

fn validate_page<N: Node>(document: &N) -> Result<()> {
    let title = document
        .query_one(Path::Title)
        .map(|title| title.inner_text().to_lowercase())
        .ok_or_else(|| Error::unexpected("page has no title"))?;

    if !title.starts_with(CALENDAR_TITLE) {
        return Err(Error::unexpected(format!(
            "page {title:?} is not a fixture calendar"
        )));
    }

    Ok(())
}

fn locate_fixtures<N: Node>(document: &N) -> Vec<N> {
    document
        .query_all(Path::Fixture)
        .into_iter()
        .filter(|fixture| !fixture.is_finished())
        .collect()
}

fn extract_fields<N: Node>(fixture: &N) -> Result<Fields> {
    let schedule = fixture
        .query_one(Path::Schedule)
        .ok_or_else(|| Error::unexpected("missing 'div.partida-data'"))?;

    let date = schedule
        .query_one(Path::ScheduleDate)
        .ok_or_else(|| Error::unexpected("missing date in 'div.partida-data'"))?
        .inner_text();

    let stadium = schedule
        .query_one(Path::ScheduleStadium)
        .ok_or_else(|| Error::unexpected("missing stadium in 'div.partida-data'"))?
        .inner_text();

    let tournament = fixture
        .query_one(Path::Tournament)
        .ok_or_else(|| Error::unexpected("missing 'div.partida-campeonato'"))?
        .inner_text();

    let teams = fixture.query_all(Path::Team);
    let [home, away] = teams.as_slice() else {
        return Err(Error::unexpected(format!(
            "expected 2 'abbr[title]' team nodes, found {}",
            teams.len()
        )));
    };

    let team_name = |team: &N| {
        team.attribute("title")
            .ok_or_else(|| Error::unexpected("team node without title"))
    };

    Ok(Fields {
        date,
        stadium,
        tournament,
        home_team: team_name(home)?,
        away_team: team_name(away)?,
    })
}

fn parse_fixture(fields: Fields, evaluation: &Evaluation) -> Result<Event> {
    let date_time = parse_date_time(&fields.date, evaluation).ok_or_else(|| {
        Error::unexpected(format!("unexpected date/time format: {:?}", fields.date))
    })?;

    Ok(Event {
        tournament: normalize::tournament(&fields.tournament),
        stadium: normalize::stadium(&fields.stadium),
        date_time,
        home_team: normalize::team(&fields.home_team),
        away_team: normalize::team(&fields.away_team),
    })
}
