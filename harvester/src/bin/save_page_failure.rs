use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bee_harvester::io::sanitize_filename;
use bee_harvester::{extract_answers, fetch_html, DEFAULT_USER_AGENT};
use clap::Parser;
use scraper::{Html, Selector};

/// Saves a puzzle page as a regression fixture and checks whether extraction works on it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page to fetch
    url: String,

    /// Name for the saved fixture
    test_name: String,

    #[arg(long, env = "BEE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Fetching HTML from {}...", cli.url);
    let html = fetch_html(&cli.url, &cli.user_agent)?;

    let failures_dir = Path::new("src/tests/fixtures/failures");
    fs::create_dir_all(failures_dir).context("Failed to create failures directory")?;

    let file_path = failures_dir.join(format!("{}.html", sanitize_filename(&cli.test_name)));
    fs::write(&file_path, &html).context("Failed to write HTML file")?;

    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    // Look for the structural pieces extraction depends on
    let document = Html::parse_document(&html);
    let script_selector = Selector::parse("script").unwrap();
    let script_count = document.select(&script_selector).count();
    let has_marker = document
        .select(&script_selector)
        .any(|s| s.text().collect::<String>().contains("gameData"));

    println!("HTML analysis results:");
    println!("  - Script blocks: {}", script_count);
    println!("  - Has gameData script: {}", has_marker);

    match extract_answers(&html) {
        Ok(words) if words.is_empty() => {
            println!("Extraction succeeded but found no answers.");
        }
        Ok(words) => {
            println!(
                "Extraction succeeded with {} answers. This may not be a failure case.",
                words.len()
            );
        }
        Err(e) => {
            println!("Extraction failed with error: {:#}", e);
            if !has_marker {
                println!("   No gameData script - structural issue");
            } else {
                println!("   gameData script present - likely a content parsing issue");
            }
            println!("\nThis page has been saved and will be included in regression tests.");
        }
    }

    Ok(())
}
