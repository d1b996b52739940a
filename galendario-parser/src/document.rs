use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

const FINISHED_CLASS: &str = "partida-finalizada";

/// Places in an agenda page the extractor asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Path {
    Title,
    Fixture,
    Schedule,
    ScheduleDate,
    ScheduleStadium,
    Tournament,
    Team,
}

/// Read-only view over a parsed document tree.
///
/// Queries return descendants of `self` in document order.
pub trait Node: Sized {
    fn query_one(&self, path: Path) -> Option<Self>;

    fn query_all(&self, path: Path) -> Vec<Self>;

    fn inner_text(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Whether the fixture this node describes has already been played.
    fn is_finished(&self) -> bool;
}

impl Path {
    fn selector(self) -> &'static Selector {
        match self {
            Self::Title => selector!("title"),
            Self::Fixture => selector!("section.agenda-partidas div.partida"),
            Self::Schedule => selector!("div.partida-data"),
            Self::ScheduleDate => selector!("div.partida-data > :nth-child(1)"),
            Self::ScheduleStadium => selector!("div.partida-data > :nth-child(2)"),
            Self::Tournament => selector!("div.partida-campeonato"),
            Self::Team => selector!("div.partida-placar abbr[title]"),
        }
    }
}

impl Node for ElementRef<'_> {
    fn query_one(&self, path: Path) -> Option<Self> {
        self.select(path.selector()).next()
    }

    fn query_all(&self, path: Path) -> Vec<Self> {
        self.select(path.selector()).collect()
    }

    fn inner_text(&self) -> String {
        self.text().collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_owned)
    }

    fn is_finished(&self) -> bool {
        self.value().classes().any(|class| class == FINISHED_CLASS)
    }
}
