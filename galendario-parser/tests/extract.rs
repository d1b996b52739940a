use std::fs::File;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::{America::Sao_Paulo, Tz};
use galendario_parser::{read_events, Calendar, Error, Evaluation, Event, Schedule};

fn evaluation() -> Evaluation {
    Evaluation::new(Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(), Sao_Paulo)
}

fn extract(name: &str) -> Result<Vec<Event>, Error> {
    let file = File::open(format!("{}/tests/testdata/{name}", env!("CARGO_MANIFEST_DIR"))).unwrap();
    read_events(file, &evaluation())
}

fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
    Sao_Paulo
        .with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .unwrap()
}

fn event(
    tournament: &str,
    stadium: &str,
    date_time: DateTime<Tz>,
    home_team: &str,
    away_team: &str,
) -> Event {
    Event {
        tournament: tournament.into(),
        stadium: stadium.into(),
        date_time,
        home_team: home_team.into(),
        away_team: away_team.into(),
    }
}

#[test]
fn extracts_all_events_in_ascending_order() {
    assert_eq!(
        extract("agenda.html").unwrap(),
        [
            event("Campeonato Mineiro", "Mário Helênio", at(1, 19, 16, 0), "Aymorés", "Atlético"),
            event("Copa do Brasil", "Arena MRV", at(4, 30, 21, 30), "Atlético", "Sport"),
            event("Copa do Brasil", "Arena Pernambuco", at(5, 22, 19, 0), "Sport", "Atlético"),
        ]
    );
}

#[test]
fn skips_finished_events() {
    assert_eq!(
        extract("agenda_finished_unfinished.html").unwrap(),
        [
            event("Libertadores", "Gigante de Arroyito", at(5, 7, 19, 0), "Rosario Central", "Atlético"),
            event("Libertadores", "Campeón del Siglo", at(5, 14, 19, 0), "Peñarol", "Atlético"),
            event("Libertadores", "Arena MRV", at(5, 28, 19, 0), "Atlético", "Caracas"),
        ]
    );
}

#[test]
fn handles_every_date_rendering() {
    assert_eq!(
        extract("agenda_multiple_formats.html").unwrap(),
        [
            event("Brasileirão", "Arena MRV", at(5, 11, 21, 0), "Atlético", "Grêmio"),
            event("Brasileirão", "Arena MRV", at(5, 19, 16, 0), "Atlético", "Bahia"),
            event("Libertadores", "Nuevo Gasómetro", at(8, 13, 21, 30), "San Lorenzo", "Atlético"),
            event("Brasileirão", "Arena MRV", at(9, 29, 0, 0), "Atlético", "Vitória"),
            event("Brasileirão", "Castelão", at(10, 5, 0, 0), "Fortaleza", "Atlético"),
        ]
    );
}

#[test]
fn time_to_be_defined_becomes_midnight() {
    assert_eq!(
        extract("agenda_a_definir_format.html").unwrap(),
        [
            event("Brasileirão", "Arena MRV", at(5, 11, 21, 0), "Atlético", "Grêmio"),
            event("Libertadores", "Nuevo Gasómetro", at(8, 13, 0, 0), "San Lorenzo", "Atlético"),
            event("Brasileirão", "Castelão", at(10, 5, 0, 0), "Fortaleza", "Atlético"),
        ]
    );
}

#[test]
fn empty_agenda_is_not_an_error() {
    assert!(extract("agenda_empty.html").unwrap().is_empty());
}

#[test]
fn rejects_pages_that_are_not_an_agenda() {
    assert!(extract("404.html").unwrap_err().is_unexpected_input());
}

#[test]
fn rejects_fixture_with_one_team() {
    let err = extract("agenda_missing_team.html").unwrap_err();

    assert!(err.is_unexpected_input());
    assert!(err.to_string().contains("found 1"), "{err}");
}

#[test]
fn rejects_unknown_date_rendering() {
    let err = extract("agenda_unknown_date.html").unwrap_err();

    assert!(err.is_unexpected_input());
    assert!(err.to_string().contains("sábado, 07/05"), "{err}");
}

#[test]
fn agenda_renders_to_icalendar() {
    let events = extract("agenda_a_definir_format.html").unwrap();
    let mut calendar = Calendar::new("Galendário");
    calendar.add_events(&events);

    assert_eq!(calendar.entries.len(), 3);
    assert_eq!(calendar.entries[0].title, "Atlético vs Grêmio");
    assert!(matches!(calendar.entries[0].schedule, Schedule::Timed { .. }));
    assert!(matches!(calendar.entries[2].schedule, Schedule::AllDay(_)));

    let mut out = Vec::new();
    calendar
        .write_ics(Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("BEGIN:VEVENT").count(), 3);
    assert_eq!(text.matches("DTEND").count(), 1);
    assert!(text.contains("DTSTART;VALUE=DATE:20241005\r\n"));
    assert!(text.contains("DTSTART:20240512T000000Z\r\n"));
}

#[test]
fn refetch_keeps_uids_when_kickoff_is_confirmed() {
    let unconfirmed = extract("agenda_a_definir_format.html").unwrap();
    let confirmed = extract("agenda_multiple_formats.html").unwrap();

    let san_lorenzo = |events: &[Event]| {
        let mut calendar = Calendar::new("Galendário");
        calendar.add_events(events);
        calendar
            .entries
            .into_iter()
            .find(|entry| entry.title == "San Lorenzo vs Atlético")
            .unwrap()
    };

    let before = san_lorenzo(&unconfirmed);
    let after = san_lorenzo(&confirmed);

    assert_eq!(before.uid, after.uid);
    assert!(matches!(before.schedule, Schedule::AllDay(_)));
    assert!(matches!(after.schedule, Schedule::Timed { .. }));
}
