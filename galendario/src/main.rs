use std::env;

use anyhow::{Context, Result};
use chrono::Utc;
use env_logger::Env;
use galendario_parser::{parse_events, Calendar, Evaluation, Event};

mod cli;
mod fetch;
mod output;

fn setup_logging() {
    env_logger::Builder::from_env(
        Env::default().filter_or("GALENDARIO_LOG", "galendario=info,galendario_parser=info"),
    )
    .init();
}

/// Parses every page and merges them into one kickoff-ordered list.
fn collect_events(pages: &[String], evaluation: &Evaluation) -> Result<Vec<Event>> {
    let mut events = Vec::new();

    for (idx, page) in pages.iter().enumerate() {
        let page_events = parse_events(page, evaluation)
            .with_context(|| format!("could not extract events from page {}", idx + 1))?;
        log::info!("page {} has {} upcoming events", idx + 1, page_events.len());
        events.extend(page_events);
    }

    events.sort_by_key(|event| event.date_time);
    Ok(events)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = cli::parse(env::args().skip(1).collect());
    let now = Utc::now();
    let evaluation = Evaluation::new(now, args.timezone);

    let client = fetch::client()?;
    let pages = fetch::fetch_pages(&client, &args.url, &args.filters()).await?;
    let events = collect_events(&pages, &evaluation)?;

    let mut calendar = Calendar::new(args.name);
    calendar.add_events(&events);
    log::info!("writing {} events", calendar.entries.len());

    output::write(&calendar, args.format, now, args.output.as_deref())
}
