use crate::checklist::{element_text, selector, Problem, Section};
use crate::fetch::fetch_html;
use anyhow::{anyhow, bail, Context, Result};
use askama::Template;
use derive_builder::Builder;
use indexmap::IndexMap;
use reqwest::Client;
use scraper::Html;
use std::{io::Write, ops::RangeInclusive};
use tracing::info;

pub const CPBOOK_URL: &str = "https://cpbook.net/methodstosolve";
pub const DEFAULT_SEPARATOR: &str = " • ";

/// Rows carry name, link, category and three columns we don't use.
const MIN_CELLS: usize = 6;

#[derive(Debug, Builder)]
pub struct CpbookScraper {
    #[builder(default = "1..=9")]
    chapters: RangeInclusive<u32>,
    #[builder(setter(into), default = "CPBOOK_URL.to_string()")]
    base_url: String,
    #[builder(setter(into), default = "\"kattis\".to_string()")]
    oj: String,
    #[builder(setter(into), default = "\"all\".to_string()")]
    quality: String,
    #[builder(setter(into), default = "DEFAULT_SEPARATOR.to_string()")]
    separator: String,
}

#[derive(Debug, Template)]
#[template(path = "cpbook.md.j2", escape = "none")]
pub struct ChapterChecklist {
    pub chapter: u32,
    pub sections: Vec<Section>,
}

impl CpbookScraper {
    pub fn chapter_url(&self, chapter: u32) -> String {
        format!(
            "{}?oj={}&topic=ch{}&quality={}",
            self.base_url, self.oj, chapter, self.quality
        )
    }

    pub async fn scrape_chapter(&self, client: &Client, chapter: u32) -> Result<ChapterChecklist> {
        let html = fetch_html(client, &self.chapter_url(chapter)).await?;
        parse_html(chapter, &html, &self.separator)
            .with_context(|| format!("failed to parse chapter {}", chapter))
    }

    /// Scrape every chapter in order, writing each one as soon as it is
    /// rendered. Returns the number of bytes written.
    pub async fn scrape_into<W: Write>(&self, client: &Client, out: &mut W) -> Result<usize> {
        let mut written = 0;
        for chapter in self.chapters.clone() {
            let checklist = self.scrape_chapter(client, chapter).await?;
            written += write_chapter(out, &checklist)?;

            info!(
                chapter,
                sections = checklist.sections.len(),
                "chapter written"
            );
        }
        Ok(written)
    }
}

impl ChapterChecklist {
    /// Rendered chapter followed by a blank line.
    pub fn generate(&self) -> Result<String> {
        let mut text = self.render()?;
        text.push('\n');
        Ok(text)
    }
}

pub fn write_chapter<W: Write>(out: &mut W, checklist: &ChapterChecklist) -> Result<usize> {
    let text = checklist.generate()?;
    out.write_all(text.as_bytes())?;
    Ok(text.len())
}

/// Group the problems of one chapter table by `section<separator>title`.
///
/// The first row is the table header. Categories keep the order in which
/// they first appear.
pub fn parse_html(chapter: u32, html: &str, separator: &str) -> Result<ChapterChecklist> {
    let document = Html::parse_document(html);
    let cell = selector("td")?;
    let link = selector("a")?;

    let mut categories: IndexMap<String, Vec<Problem>> = IndexMap::new();

    for (idx, row) in document.select(&selector("tr")?).skip(1).enumerate() {
        let cells = row.select(&cell).collect::<Vec<_>>();
        let [name, image, category, _, _, _, ..] = cells.as_slice() else {
            bail!(
                "row {} has {} cells, expected at least {}",
                idx + 1,
                cells.len(),
                MIN_CELLS
            );
        };

        let name = element_text(*name);
        let href = image
            .select(&link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| anyhow!("row {} ({:?}) has no problem link", idx + 1, name))?;

        let category = element_text(*category);
        let (section, title) = category.split_once(", ").ok_or_else(|| {
            anyhow!(
                "row {} ({:?}) has malformed category {:?}",
                idx + 1,
                name,
                category
            )
        })?;

        categories
            .entry(format!("{}{}{}", section, separator, title))
            .or_default()
            .push(Problem::new(name, href.trim())?);
    }

    let sections = categories
        .into_iter()
        .map(|(category, problems)| Section { category, problems })
        .collect();

    Ok(ChapterChecklist { chapter, sections })
}
