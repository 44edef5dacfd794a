mod author;
pub use author::*;

mod page;
pub use page::*;

mod asset;
pub use asset::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the site as a whole knows about the book being introduced
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// The title of the book. This is trusted markup and will be inserted into pages as-is.
    #[serde(alias = "htmlTitle")]
    pub html_title: String,

    /// The editors of the book, in the order they should be listed
    pub authors: Vec<Author>,
}

impl SiteMetadata {
    pub fn set_html_title<S: ToString>(&mut self, html_title: S) -> &mut Self {
        self.html_title = html_title.to_string();
        self
    }

    pub fn add_author<A: Into<Author>>(&mut self, author: A) -> &mut Self {
        self.authors.push(author.into());
        self
    }

    /// Last names shared by more than one author, in order of first appearance
    pub fn duplicate_last_names(&self) -> Vec<&str> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for author in &self.authors {
            *counts.entry(author.last.as_str()).or_default() += 1;
        }

        let mut duplicates: Vec<&str> = Vec::new();
        for author in &self.authors {
            let last = author.last.as_str();
            if counts.get(last).copied().unwrap_or_default() > 1 && !duplicates.contains(&last) {
                duplicates.push(last);
            }
        }
        duplicates
    }
}
