use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use futures::future;
use reqwest::{header::ACCEPT, Client, StatusCode};

pub const AGENDA_URL: &str = "https://www.atletico.com.br/futebol/agenda";

// The agenda answers non-browser agents with an empty page.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Form fields the agenda page filters on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub tournament: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl Filter {
    fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = Vec::new();

        if let Some(tournament) = &self.tournament {
            form.push(("filtro-campeonato", tournament.clone()));
        }
        if let Some(from) = self.from {
            form.push(("data-inicio", from.format("%d/%m/%Y").to_string()));
        }
        if let Some(to) = self.to {
            form.push(("data-final", to.format("%d/%m/%Y").to_string()));
        }

        form
    }
}

pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("could not build http client")
}

pub async fn fetch_page(client: &Client, url: &str, filter: &Filter) -> Result<String> {
    log::debug!("fetching {url} with {filter:?}");

    let response = client
        .post(url)
        .header(ACCEPT, "text/html")
        .form(&filter.form())
        .send()
        .await
        .with_context(|| format!("could not make POST request to {url}"))?;

    let status = response.status();
    if status != StatusCode::OK {
        bail!("unexpected status code from {url}: {status}");
    }

    response
        .text()
        .await
        .with_context(|| format!("could not read response body from {url}"))
}

/// Fetches one page per filter, in filter order.
pub async fn fetch_pages(client: &Client, url: &str, filters: &[Filter]) -> Result<Vec<String>> {
    future::try_join_all(filters.iter().map(|filter| fetch_page(client, url, filter))).await
}
