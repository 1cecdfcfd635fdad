use anyhow::{anyhow, bail, Result};
use scraper::{ElementRef, Selector};
use serde::Serialize;
use std::fmt;

/// A single problem entry, rendered as one Markdown checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub name: String,
    pub link: String,
}

/// Problems sharing a category heading, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub category: String,
    pub problems: Vec<Problem>,
}

impl Problem {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let link = link.into();
        if name.trim().is_empty() {
            bail!("problem linking to {:?} has an empty name", link);
        }
        if link.trim().is_empty() {
            bail!("problem {:?} has an empty link", name);
        }
        Ok(Self { name, link })
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [{0}]({1}) [[{0}]]", self.name, self.link)
    }
}

impl Section {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            problems: vec![],
        }
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector {:?}: {:?}", css, e))
}

/// All descendant text of `element`, trimmed.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
