use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::archive::{append_puzzle, Archive, Puzzle};
use crate::io::overwrite_file;

pub const PUZZLE_URL: &str = "https://www.nytimes.com/puzzles/spelling-bee";
pub const DEFAULT_ARCHIVE: &str = "xml/words.xml";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Script text that identifies the block holding the game data.
pub const GAME_DATA_MARKER: &str = "window.gameData";

#[derive(Debug, Deserialize, Default)]
pub struct GameData {
    #[serde(default)]
    pub today: Option<GameDay>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GameDay {
    #[serde(default)]
    pub print_date: Option<String>,
    #[serde(default)]
    pub answers: Vec<String>,
}

/// What a harvest run did to the archive.
#[derive(Debug, Clone, PartialEq)]
pub enum HarvestOutcome {
    AlreadyPresent { date: String },
    NoWords { date: String },
    Appended { date: String, words: usize },
}

impl fmt::Display for HarvestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarvestOutcome::AlreadyPresent { date } => {
                write!(f, "Puzzle for {} already exists. No action taken.", date)
            }
            HarvestOutcome::NoWords { date } => write!(f, "No words fetched for {}.", date),
            HarvestOutcome::Appended { date, words } => {
                write!(f, "Appended puzzle for {} with {} words.", date, words)
            }
        }
    }
}

pub fn fetch_html(url: &str, user_agent: &str) -> Result<String> {
    log::info!("Fetching {}", url);

    let client = Client::new();
    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .context("Failed to send request")?
        .error_for_status()
        .with_context(|| format!("Request to {} was not successful", url))?;

    let html = response.text().context("Failed to get response text")?;
    log::debug!("Received {} bytes from {}", html.len(), url);
    Ok(html)
}

/// Returns the text of the first `<script>` block containing the game data marker.
pub fn find_game_data_script(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let script_selector = Selector::parse("script").unwrap();

    document
        .select(&script_selector)
        .map(|script| script.text().collect::<String>())
        .find(|text| text.contains(GAME_DATA_MARKER))
        .ok_or_else(|| anyhow::anyhow!("Cannot find gameData in page"))
}

/// Cuts the balanced `{ ... }` object that follows the marker out of `script`.
///
/// Braces are counted naively, without regard for string literals, starting
/// at the first `{` after the marker and ending where the depth returns to zero.
pub fn extract_balanced_object(script: &str) -> Result<&str> {
    let marker_at = script.find(GAME_DATA_MARKER).unwrap_or(0);
    let start = script[marker_at..]
        .find('{')
        .map(|offset| marker_at + offset)
        .ok_or_else(|| anyhow::anyhow!("No object literal follows {}", GAME_DATA_MARKER))?;

    let mut depth = 0usize;
    for (i, c) in script[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => continue,
        }
        if depth == 0 {
            return Ok(&script[start..start + i + 1]);
        }
    }

    Err(anyhow::anyhow!(
        "Unbalanced braces in {} object (depth {} at end of script)",
        GAME_DATA_MARKER,
        depth
    ))
}

pub fn parse_game_data(json: &str) -> Result<GameData> {
    serde_json::from_str(json).context("Failed to parse gameData JSON")
}

/// Finds and parses the embedded game data in a page.
pub fn extract_game_day(html: &str) -> Result<GameDay> {
    let script = find_game_data_script(html)?;
    let object = extract_balanced_object(&script)?;
    let data = parse_game_data(object)?;
    Ok(data.today.unwrap_or_default())
}

/// Today's answers from a page, uppercased and in page order.
pub fn extract_answers(html: &str) -> Result<Vec<String>> {
    let day = extract_game_day(html)?;
    Ok(day.answers.iter().map(|w| w.to_uppercase()).collect())
}

/// Appends the puzzle for `date` to the archive at `archive_path` unless it
/// is already there.
///
/// `fetch` is only called when the date is missing from the archive.
pub fn harvest<F>(archive_path: &Path, date: NaiveDate, fetch: F) -> Result<HarvestOutcome>
where
    F: FnOnce() -> Result<String>,
{
    let date_str = date.format("%Y-%m-%d").to_string();

    let source = Archive::read_source(archive_path)
        .with_context(|| format!("Failed to load archive {}", archive_path.display()))?;
    let archive = match source.as_deref() {
        Some(xml) => Archive::parse(xml)
            .with_context(|| format!("Failed to parse archive {}", archive_path.display()))?,
        None => Archive::default(),
    };
    if archive.dates().contains(date_str.as_str()) {
        return Ok(HarvestOutcome::AlreadyPresent { date: date_str });
    }

    let html = fetch()?;
    let day = extract_game_day(&html)?;

    if let Some(print_date) = day.print_date.as_deref() {
        if print_date != date_str {
            log::warn!(
                "Page is for {} but harvesting as {}",
                print_date,
                date_str
            );
        }
    }

    let words: Vec<String> = day.answers.iter().map(|w| w.to_uppercase()).collect();
    if words.is_empty() {
        return Ok(HarvestOutcome::NoWords { date: date_str });
    }

    let count = words.len();
    let puzzle = Puzzle::new(&date_str, words);
    let xml = match source.as_deref() {
        Some(existing) => append_puzzle(existing, &puzzle),
        None => {
            let mut fresh = archive;
            fresh.push(puzzle);
            fresh.to_xml()
        }
    }
    .context("Failed to serialize archive")?;
    overwrite_file(archive_path, &xml)?;
    log::info!(
        "Wrote puzzle {} to {}",
        date_str,
        archive_path.display()
    );

    Ok(HarvestOutcome::Appended {
        date: date_str,
        words: count,
    })
}
