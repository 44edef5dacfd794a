//! Interactive configuration wizard for creating `intro-book.toml`.
//!
//! The wizard collects the book title, its editors (with their affiliations and ORCID
//! identifiers), and where pages, assets, and the generated site live.

use crate::config::{AssetsConfig, Configuration, OutputConfig, PagesConfig, CONFIG_FILE};
use crate::detection::{detect_defaults, DetectedDefaults};
use crate::site::{AuthorBuilder, SiteMetadata};
use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

/// Last names key each editor's byline entry, so one made of nothing but whitespace is refused
fn validate_last_name(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Last name can't be empty")
    } else {
        Ok(())
    }
}

/// Run the interactive configuration wizard.
///
/// Prompts the user for the book metadata and directories, then writes `intro-book.toml` to the
/// current directory.
pub fn run() -> Result<()> {
    let theme = ColorfulTheme::default();

    let DetectedDefaults {
        title: detected_title,
        pages_dir: detected_pages_dir,
        assets_dir: detected_assets_dir,
    } = detect_defaults(&PathBuf::from("."));

    let mut site = SiteMetadata::default();

    let html_title: String = Input::with_theme(&theme)
        .with_prompt("Book title (may contain HTML)")
        .with_initial_text(detected_title.unwrap_or_default())
        .allow_empty(false)
        .interact_text()
        .with_context(|| "Failed to obtain title")?;
    site.set_html_title(html_title);

    'authors: loop {
        if !site.authors.is_empty() {
            println!(
                "Editors: [{}]",
                site.authors
                    .iter()
                    .map(|author| author.to_string())
                    .collect::<Vec<String>>()
                    .join("], [")
            );
        }

        let first: String = Input::with_theme(&theme)
            .with_prompt("Editor's first name (leave blank to move on)")
            .allow_empty(true)
            .interact_text()?;
        if first.trim().is_empty() {
            break 'authors;
        }

        let mut author = AuthorBuilder::default();
        author.first(first.trim());

        let middle: String = Input::with_theme(&theme)
            .with_prompt("Middle name (optional)")
            .allow_empty(true)
            .interact_text()?;
        if !middle.trim().is_empty() {
            author.middle(middle.trim());
        }

        let last: String = Input::with_theme(&theme)
            .with_prompt("Last name")
            .validate_with(|input: &String| validate_last_name(input))
            .interact_text()?;
        let last = last.trim().to_string();
        if site.authors.iter().any(|a| a.last == last) {
            log::warn!("another editor already has the last name `{last}`");
        }
        author.last(last);

        'affiliations: loop {
            let affiliation: String = Input::with_theme(&theme)
                .with_prompt("Affiliation (leave blank for done)")
                .allow_empty(true)
                .interact_text()?;
            if affiliation.trim().is_empty() {
                break 'affiliations;
            }
            author.affiliation(affiliation.trim());
        }

        let orcid: String = Input::with_theme(&theme)
            .with_prompt("ORCID iD, e.g. 0000-0002-1825-0097 (optional)")
            .allow_empty(true)
            .interact_text()?;
        if !orcid.trim().is_empty() {
            author.orcid(orcid.trim());
        }

        site.add_author(author.build().with_context(|| "Failed to build author")?);
    }

    let pages_dir: String = Input::with_theme(&theme)
        .with_prompt("Pages directory")
        .default(
            detected_pages_dir
                .unwrap_or_else(|| PagesConfig::default().dir)
                .display()
                .to_string(),
        )
        .interact_text()?;

    let assets_dir: String = Input::with_theme(&theme)
        .with_prompt("Assets directory (must contain orcid.png)")
        .default(
            detected_assets_dir
                .unwrap_or_else(|| AssetsConfig::default().dir)
                .display()
                .to_string(),
        )
        .interact_text()?;

    let output_dir: String = Input::with_theme(&theme)
        .with_prompt("Output directory")
        .default(OutputConfig::default().dir.display().to_string())
        .interact_text()?;

    let config = Configuration {
        site,
        pages: PagesConfig {
            dir: PathBuf::from(pages_dir),
            ..PagesConfig::default()
        },
        assets: AssetsConfig {
            dir: PathBuf::from(assets_dir),
        },
        output: OutputConfig {
            dir: PathBuf::from(output_dir),
            ..OutputConfig::default()
        },
    };

    let config =
        toml::to_string_pretty(&config).with_context(|| "Failed to convert configuration to TOML")?;

    let config_path = PathBuf::from(CONFIG_FILE);
    if config_path.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt(format!(
                "{CONFIG_FILE} already exists, do you want to override it?"
            ))
            .interact()?
    {
        println!("Configuration:");
        println!("{}", config);
    } else {
        std::fs::write(&config_path, config)
            .with_context(|| "Failed to write configuration file")?;
        println!("{CONFIG_FILE} written!");
    }

    Ok(())
}
