/// Fragments of competition names as the club writes them, paired with the
/// name shown in the calendar. First match wins.
const TOURNAMENTS: &[(&str, &str)] = &[
    ("libertadores", "Libertadores"),
    ("brasileir", "Brasileirão"),
    ("do brasil", "Copa do Brasil"),
    ("mineiro", "Campeonato Mineiro"),
    ("americana", "Sul-Americana"),
];

pub fn tournament(input: &str) -> String {
    let input = input.trim();
    let folded = input.to_lowercase();

    TOURNAMENTS
        .iter()
        .find(|(fragment, _)| folded.contains(fragment))
        .map_or_else(|| input.to_owned(), |(_, name)| (*name).to_owned())
}

pub fn stadium(input: &str) -> String {
    input.trim().to_owned()
}

pub fn team(input: &str) -> String {
    input.trim().to_owned()
}
