use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, warn};

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// GET `url` and return the body as text.
///
/// The status code is not checked: error pages are handed to the parser like
/// any other body, which then usually fails on missing structure.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    debug!(url, "fetching page");
    let res = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch {}", url))?;

    let status = res.status();
    if !status.is_success() {
        warn!(url, %status, "unexpected status, parsing body anyway");
    }

    let html = res
        .text()
        .await
        .with_context(|| format!("failed to read body of {}", url))?;
    debug!(url, bytes = html.len(), "page fetched");
    Ok(html)
}
