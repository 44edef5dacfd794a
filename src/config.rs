//! Project configuration, stored in `intro-book.toml`.
//!
//! The `[site]` table holds the book's metadata and is required. Every other table has sensible
//! defaults so a minimal configuration only needs a title and a list of editors.

use crate::site::SiteMetadata;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file, looked up in the current directory
pub const CONFIG_FILE: &str = "intro-book.toml";

/// Where page sources are found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Directory containing page sources
    pub dir: PathBuf,
    /// Glob (relative to `dir`) selecting which files are page sources
    pub pattern: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("pages"),
            pattern: "*.html".to_string(),
        }
    }
}

/// Where static assets (the ORCID badge) are found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}

/// Generated site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the site is written to
    pub dir: PathBuf,
    /// Language code (BCP 47 format, e.g., "en", "en-GB", "fr")
    pub language: String,
    /// Document title shown in browser tabs and search results
    pub seo_title: String,
    /// Stylesheet href to link from every page. Empty string for none.
    pub stylesheet: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
            language: "en".to_string(),
            seo_title: "Introduction".to_string(),
            stylesheet: String::new(),
        }
    }
}

impl OutputConfig {
    /// Returns the stylesheet href, if configured.
    pub fn stylesheet_opt(&self) -> Option<&str> {
        if self.stylesheet.is_empty() {
            None
        } else {
            Some(&self.stylesheet)
        }
    }
}

/// Complete configuration for an intro-book project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub site: SiteMetadata,
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Configuration {
    /// Load the configuration from a TOML file. Relative directories in it are resolved against
    /// the directory the file lives in.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        let config = Configuration::parse(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    pub fn parse(contents: &str) -> Result<Configuration> {
        toml::from_str(contents).with_context(|| "Failed to parse TOML")
    }

    /// Resolve the configured directories against `root`, leaving absolute paths alone
    pub fn relative_to(mut self, root: &Path) -> Configuration {
        self.pages.dir = root.join(&self.pages.dir);
        self.assets.dir = root.join(&self.assets.dir);
        self.output.dir = root.join(&self.output.dir);
        self
    }
}
