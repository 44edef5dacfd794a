//! Loads everything a render needs up front.
//!
//! Rendering is pure, so all the fallible work (reading page sources, parsing their front matter,
//! locating the ORCID badge) happens here first.

use crate::config::{Configuration, PagesConfig};
use crate::site::{ImageAsset, PageContext, SiteMetadata};
use anyhow::{anyhow, Context, Result};
use globset::Glob;
use ignore::Walk;
use std::path::{Path, PathBuf};

/// A page source that has been read and parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSource {
    /// Path of the source, relative to the pages directory
    pub path: PathBuf,
    pub context: PageContext,
}

impl PageSource {
    /// Load a single page source from disk
    pub fn load(pages_dir: &Path, relative_path: &Path) -> Result<PageSource> {
        let full_path = pages_dir.join(relative_path);
        let contents = std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read page {}", full_path.display()))?;
        let context = PageContext::parse(&contents)
            .with_context(|| format!("Failed to parse page {}", full_path.display()))?;

        Ok(PageSource {
            path: relative_path.to_path_buf(),
            context,
        })
    }

    /// Where the rendered page goes, relative to the output directory
    pub fn output_path(&self) -> PathBuf {
        self.path.with_extension("html")
    }
}

/// Everything needed to render every page of the site
#[derive(Debug)]
pub struct SiteData {
    pub site: SiteMetadata,
    pub pages: Vec<PageSource>,
    pub orcid_badge: ImageAsset,
}

impl SiteData {
    pub fn load(config: &Configuration) -> Result<SiteData> {
        let pages = load_pages(&config.pages)?;
        log::info!(
            "loaded {} page(s) from {}",
            pages.len(),
            config.pages.dir.display()
        );

        let orcid_badge = ImageAsset::orcid_badge(&config.assets.dir)
            .with_context(|| "Failed to locate the ORCID badge")?;

        Ok(SiteData {
            site: config.site.clone(),
            pages,
            orcid_badge,
        })
    }
}

/// Find and load every page source, sorted by path
pub fn load_pages(config: &PagesConfig) -> Result<Vec<PageSource>> {
    let root = &config.dir;
    if !root.is_dir() {
        return Err(anyhow!("Pages path {} isn't a directory!", root.display()));
    }

    let matcher = Glob::new(&config.pattern)
        .with_context(|| format!("Invalid glob pattern: {}", config.pattern))?
        .compile_matcher();

    let mut paths: Vec<PathBuf> = Vec::default();
    for entry in Walk::new(root) {
        let entry = entry.with_context(|| "Failed to walk pages directory")?;
        if !entry.path().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).with_context(|| {
            format!(
                "Failed to remove root {} from path {}",
                root.display(),
                entry.path().display()
            )
        })?;
        if matcher.is_match(relative) {
            paths.push(relative.to_path_buf());
        } else {
            log::debug!("skipping non-page file {}", relative.display());
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| PageSource::load(root, path))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{AssetsConfig, OutputConfig};
    use crate::site::AuthorBuilder;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("can create parent dir");
        }
        std::fs::write(path, contents).expect("can write file");
    }

    #[test]
    fn loads_matching_pages_in_order() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(&dir.path().join("b.html"), "<p>B</p>");
        write(&dir.path().join("a.html"), "+++\ntitle = \"A\"\n+++\n<p>A</p>");
        write(&dir.path().join("notes.txt"), "not a page");
        write(&dir.path().join("volume").join("c.html"), "<p>C</p>");

        let pages = load_pages(&PagesConfig {
            dir: dir.path().to_path_buf(),
            pattern: "*.html".to_string(),
        })
        .expect("can load pages");

        let paths: Vec<PathBuf> = pages.iter().map(|p| p.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a.html"),
                PathBuf::from("b.html"),
                Path::new("volume").join("c.html"),
            ]
        );
        assert_eq!(pages[0].context.title.as_deref(), Some("A"));
        assert_eq!(pages[0].context.html, "<p>A</p>");
        assert_eq!(pages[1].context.title, None);
    }

    #[test]
    fn output_path_is_html() {
        let page = PageSource {
            path: Path::new("volume").join("intro.htm"),
            context: PageContext::new(""),
        };
        assert_eq!(page.output_path(), Path::new("volume").join("intro.html"));
    }

    #[test]
    fn bad_page_names_the_file() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(&dir.path().join("broken.html"), "+++\ntitle = \"never closed\"\n");

        let err = load_pages(&PagesConfig {
            dir: dir.path().to_path_buf(),
            pattern: "*.html".to_string(),
        })
        .expect_err("broken page fails to load");
        assert!(format!("{err:#}").contains("broken.html"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        assert!(load_pages(&PagesConfig {
            dir: dir.path().to_path_buf(),
            pattern: "[".to_string(),
        })
        .is_err());
    }

    #[test]
    fn site_data_requires_orcid_badge() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        write(&dir.path().join("pages").join("index.html"), "<p>Hi</p>");
        std::fs::create_dir_all(dir.path().join("assets")).expect("can create assets dir");

        let mut site = SiteMetadata::default();
        site.set_html_title("Title").add_author(
            AuthorBuilder::default()
                .first("A")
                .last("Smith")
                .build()
                .expect("can build author"),
        );
        let config = Configuration {
            site,
            pages: PagesConfig::default(),
            assets: AssetsConfig::default(),
            output: OutputConfig::default(),
        }
        .relative_to(dir.path());

        assert!(SiteData::load(&config).is_err());

        write(&dir.path().join("assets").join("orcid.png"), "png");
        let data = SiteData::load(&config).expect("can load site data");
        assert_eq!(data.pages.len(), 1);
        assert_eq!(data.orcid_badge.src, "static/orcid.png");
        assert_eq!(data.site.authors[0].last, "Smith");
    }
}
