use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::Client;
use url::Url;

use crate::document::html_document::HtmlDocument;

mod config;
mod document;
mod extractors;
mod scraping;
mod update_page;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration settings
    let config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    println!(
        "{}",
        format!("{} v{}", config.base.name, config.base.version).green()
    );

    let base_url =
        Url::parse(&config.page.base_url).context("Invalid page.base_url in configuration")?;

    // Read the host page
    let page_html = tokio::fs::read_to_string(&config.page.source_file)
        .await
        .context(format!(
            "Failed to read page file: {}",
            config.page.source_file
        ))?;

    let mut document = HtmlDocument::parse(&page_html);

    let client = Client::builder()
        .user_agent(config.http.user_agent.as_str())
        .build()
        .context("Failed to build HTTP client")?;

    // Rewrite each marker element's image from its linked page's og:image
    let stats = update_page::update_page(
        &client,
        &mut document,
        &base_url,
        &config.page.marker_class,
    )
    .await;

    tokio::fs::write(&config.page.output_file, document.html())
        .await
        .context(format!(
            "Failed to write page file: {}",
            config.page.output_file
        ))?;

    println!(
        "{}",
        format!(
            "Processed {} candidates: {} updated, {} skipped",
            stats.candidates, stats.updated, stats.skipped
        )
        .green()
    );

    Ok(())
}
