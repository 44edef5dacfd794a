//! Per-page context and the page source format it is loaded from.
//!
//! A page source is a file of trusted markup, optionally preceded by a TOML front matter block
//! fenced with `+++` lines:
//!
//! ```text
//! +++
//! title = "Volume <b>II</b>"
//! +++
//! <p>Welcome to the second volume.</p>
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Line that opens and closes a front matter block
const FRONT_MATTER_FENCE: &str = "+++";

/// What a single page contributes to its own rendering
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageContext {
    /// Optional page title, trusted markup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The page body, trusted markup
    pub html: String,
}

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    title: Option<String>,
}

impl PageContext {
    #[allow(unused)]
    pub fn new<S: Into<String>>(html: S) -> PageContext {
        PageContext {
            title: None,
            html: html.into(),
        }
    }

    #[allow(unused)]
    pub fn with_title<S: Into<String>>(mut self, title: S) -> PageContext {
        self.title = Some(title.into());
        self
    }

    /// The title, but only if there is something to show
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// Parse a page source. Everything after the front matter (if any) is the page body.
    pub fn parse(contents: &str) -> Result<PageContext> {
        let (front_matter, html) = split_front_matter(contents)?;

        let front_matter: FrontMatter = match front_matter {
            Some(front_matter) => {
                toml::from_str(front_matter).with_context(|| "Failed to parse page front matter")?
            }
            None => FrontMatter::default(),
        };

        Ok(PageContext {
            title: front_matter.title,
            html: html.to_string(),
        })
    }
}

/// Split the contents into the front matter (without fences) and the remaining body
fn split_front_matter(contents: &str) -> Result<(Option<&str>, &str)> {
    let Some(first_line_end) = contents.find('\n') else {
        return Ok((None, contents));
    };
    if contents[..first_line_end].trim() != FRONT_MATTER_FENCE {
        return Ok((None, contents));
    }

    let rest = &contents[first_line_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim() == FRONT_MATTER_FENCE {
            let front_matter = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((Some(front_matter), body));
        }
        offset += line.len();
    }

    Err(anyhow!(
        "Front matter opened with `{FRONT_MATTER_FENCE}` is never closed"
    ))
}
