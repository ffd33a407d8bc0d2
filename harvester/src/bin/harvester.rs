use std::path::PathBuf;

use anyhow::Result;
use bee_harvester::{fetch_html, harvest, DEFAULT_ARCHIVE, DEFAULT_USER_AGENT, PUZZLE_URL};
use chrono::Local;
use clap::Parser;

/// Appends today's puzzle answers to the raw word archive
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw archive to append to
    #[arg(long, env = "BEE_ARCHIVE", default_value = DEFAULT_ARCHIVE)]
    archive: PathBuf,

    /// Puzzle page to scrape
    #[arg(long, env = "BEE_PAGE_URL", default_value = PUZZLE_URL)]
    url: String,

    /// User-Agent header sent with the page request
    #[arg(long, env = "BEE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let today = Local::now().date_naive();
    let outcome = harvest(&cli.archive, today, || fetch_html(&cli.url, &cli.user_agent))?;
    println!("{}", outcome);

    Ok(())
}
