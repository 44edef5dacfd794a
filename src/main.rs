use anyhow::{anyhow, Context, Result};
use cli::Cli;
use config::{Configuration, CONFIG_FILE};
use indicatif::{ProgressBar, ProgressStyle};
use loader::{PageSource, SiteData};
use render::PageRenderer;
use std::process::ExitCode;

mod cli;
mod config;
mod config_wizard;
mod detection;
mod generate;
mod loader;
mod logger;
mod render;
mod site;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    logger::init(logger::level_from_verbosity(cli.verbose, cli.quiet))
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))?;

    match &cli.command {
        cli::Commands::Config => config_wizard::run(),
        cli::Commands::Render => {
            log::info!("loading configuration...");
            let config = Configuration::load(CONFIG_FILE)?;

            let progress = ProgressBar::new(0);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .with_context(|| "Failed to parse progress style")?
                    .progress_chars("#>-"),
            );

            let stats = generate::generate(&config, &progress)
                .with_context(|| "Failed to render site")?;

            println!();
            for page in &stats.pages {
                println!("  Page:  {}", page.display());
            }
            println!("  Badge: {}", stats.orcid_badge.display());
            Ok(())
        }
        cli::Commands::Check => {
            let config = Configuration::load(CONFIG_FILE)?;
            let data = SiteData::load(&config)?;
            generate::warn_duplicate_keys(&data);

            println!("  Authors: {}", data.site.authors.len());
            println!("  Pages:   {}", data.pages.len());
            println!("  Badge:   {}", data.orcid_badge.path.display());
            Ok(())
        }
        cli::Commands::Inspect { page } => {
            let config = Configuration::load(CONFIG_FILE)?;
            let page = PageSource::load(&config.pages.dir, page)?;
            let orcid_badge = site::ImageAsset::orcid_badge(&config.assets.dir)
                .with_context(|| "Failed to locate the ORCID badge")?
                .relative_to_page(&page.output_path());

            let tree = PageRenderer::render(&config.site, &page.context, &orcid_badge);
            let json = serde_json::to_string_pretty(&tree)
                .with_context(|| "Failed to convert document tree to JSON")?;
            println!("{json}");
            Ok(())
        }
    }
}
