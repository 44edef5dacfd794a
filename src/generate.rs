//! Site generation: load, render every page, write it out.

use crate::config::Configuration;
use crate::loader::SiteData;
use crate::render::layout::Layout;
use crate::render::PageRenderer;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Statistics from generating the site, used for user feedback.
#[derive(Debug)]
pub struct GenerateStats {
    /// Every page that was written, in generation order
    pub pages: Vec<PathBuf>,
    /// Where the ORCID badge was copied to
    pub orcid_badge: PathBuf,
}

/// Report authors whose last names collide, since they share a byline key
pub fn warn_duplicate_keys(data: &SiteData) {
    for last in PageRenderer::duplicate_keys(&data.site) {
        log::warn!(
            "more than one author has the last name `{last}`; their byline entries share a key"
        );
    }
}

/// Render the whole site into the configured output directory.
pub fn generate(config: &Configuration, progress: &ProgressBar) -> Result<GenerateStats> {
    let data = SiteData::load(config).with_context(|| "Failed to load site data")?;
    warn_duplicate_keys(&data);

    let output_dir = &config.output.dir;
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            output_dir.display()
        )
    })?;

    let layout = Layout {
        language: &config.output.language,
        seo_title: &config.output.seo_title,
        stylesheet: config.output.stylesheet_opt(),
    };

    progress.set_length(data.pages.len() as u64);
    progress.set_message("Rendering pages...");

    let mut pages = Vec::with_capacity(data.pages.len());
    for page in &data.pages {
        let output_path = page.output_path();
        let orcid_badge = data.orcid_badge.relative_to_page(&output_path);
        let body = PageRenderer::render(&data.site, &page.context, &orcid_badge);
        let html = layout.wrap(&body);

        let outfile = output_dir.join(output_path);
        if let Some(parent) = outfile.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&outfile, html)
            .with_context(|| format!("Failed to write page {}", outfile.display()))?;
        log::debug!("wrote {}", outfile.display());

        pages.push(outfile);
        progress.inc(1);
    }

    let orcid_badge = data.orcid_badge.output_path(output_dir);
    if let Some(parent) = orcid_badge.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::copy(&data.orcid_badge.path, &orcid_badge).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            data.orcid_badge.path.display(),
            orcid_badge.display()
        )
    })?;

    progress.finish_with_message("Site generated");

    Ok(GenerateStats { pages, orcid_badge })
}
