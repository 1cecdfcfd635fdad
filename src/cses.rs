use crate::checklist::{element_text, selector, Problem, Section};
use crate::fetch::fetch_html;
use anyhow::{anyhow, bail, Result};
use askama::Template;
use derive_builder::Builder;
use reqwest::Client;
use scraper::Html;
use strum::{Display, EnumString};
use tracing::{info, warn};

pub const CSES_ORIGIN: &str = "https://cses.fi";
pub const CSES_PROBLEMSET_URL: &str = "https://cses.fi/problemset/";

#[derive(Debug, Builder)]
pub struct CsesScraper {
    #[builder(setter(into), default = "CSES_PROBLEMSET_URL.to_string()")]
    url: String,
    #[builder(setter(into), default = "CSES_ORIGIN.to_string()")]
    origin: String,
    #[builder(default)]
    pairing: Pairing,
}

/// How category headings are matched with task lists.
///
/// Headings and lists are unrelated elements on the page; the Nth heading is
/// assumed to title the Nth list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Pairing {
    /// Fail when the heading and list counts differ.
    #[default]
    Strict,
    /// Pair up to the shorter of the two and drop the rest.
    Shortest,
}

#[derive(Debug, Default, Template)]
#[template(path = "cses.md.j2", escape = "none")]
pub struct CsesChecklist {
    pub sections: Vec<Section>,
}

impl CsesScraper {
    pub async fn scrape(&self, client: &Client) -> Result<CsesChecklist> {
        let html = fetch_html(client, &self.url).await?;
        let checklist = parse_html(&html, &self.origin, self.pairing)?;

        info!(
            url = %self.url,
            sections = checklist.sections.len(),
            "problem set parsed"
        );
        Ok(checklist)
    }
}

impl CsesChecklist {
    pub fn generate(&self) -> Result<String> {
        Ok(self.render()?)
    }
}

/// Extract the categorised task lists from the problem set page.
///
/// The first `h2` and the first `ul.task-list` belong to the general section
/// at the top of the page and are skipped.
pub fn parse_html(html: &str, origin: &str, pairing: Pairing) -> Result<CsesChecklist> {
    let document = Html::parse_document(html);
    let link = selector("a")?;
    let item = selector("li")?;

    let headings = document.select(&selector("h2")?).skip(1).collect::<Vec<_>>();
    let lists = document
        .select(&selector("ul.task-list")?)
        .skip(1)
        .collect::<Vec<_>>();

    if headings.len() != lists.len() {
        match pairing {
            Pairing::Strict => bail!(
                "found {} category headings but {} task lists",
                headings.len(),
                lists.len()
            ),
            Pairing::Shortest => warn!(
                headings = headings.len(),
                lists = lists.len(),
                "heading and list counts differ, dropping unpaired elements"
            ),
        }
    }

    let mut sections = vec![];
    for (heading, list) in headings.into_iter().zip(lists) {
        let mut section = Section::new(element_text(heading));

        for li in list.select(&item) {
            let a = li
                .select(&link)
                .next()
                .ok_or_else(|| anyhow!("task without a link in {:?}", section.category))?;
            let href = a
                .value()
                .attr("href")
                .ok_or_else(|| anyhow!("task link without href in {:?}", section.category))?
                .trim();
            let name = element_text(a);
            if href.is_empty() {
                bail!("task {:?} in {:?} has an empty href", name, section.category);
            }

            section
                .problems
                .push(Problem::new(name, format!("{}{}", origin, href))?);
        }

        sections.push(section);
    }

    Ok(CsesChecklist { sections })
}
