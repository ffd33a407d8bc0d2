//! Derives the enriched archive from raw puzzles.

use std::collections::BTreeMap;

use bee_harvester::{Archive, Puzzle};
use chrono::NaiveDate;
use rand::Rng;

use crate::scramble::scramble_word;

pub const RAW_DATE_FORMAT: &str = "%Y-%m-%d";
/// e.g. `January 05, 2024`
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedWord {
    pub original: String,
    pub scrambled: String,
    pub start_letter: String,
    pub first_two: String,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPuzzle {
    /// Display form, or the raw value when it could not be parsed.
    pub date: String,
    pub url: String,
    pub puzzle_id: String,
    pub letters: String,
    pub letter_tiles: BTreeMap<u8, String>,
    pub words: Vec<EnrichedWord>,
    pub subscribers_only: bool,
}

/// `2024-01-05` -> `January 05, 2024`. Unparseable input is returned as is.
pub fn format_display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, RAW_DATE_FORMAT) {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(e) => {
            log::warn!("Keeping unparseable date {:?}: {}", raw, e);
            raw.to_string()
        }
    }
}

/// Sort key for a display date; unparseable dates sort before everything else.
pub fn display_date_key(display: &str) -> NaiveDate {
    NaiveDate::parse_from_str(display, DISPLAY_DATE_FORMAT).unwrap_or(NaiveDate::MIN)
}

pub fn enrich_word<R: Rng + ?Sized>(text: &str, rng: &mut R) -> EnrichedWord {
    let original = text.to_uppercase().trim().to_string();

    EnrichedWord {
        scrambled: scramble_word(&original, rng),
        start_letter: original.chars().take(1).collect(),
        first_two: original.chars().take(2).collect(),
        length: original.chars().count(),
        original,
    }
}

pub fn enrich_puzzle<R: Rng + ?Sized>(puzzle: &Puzzle, rng: &mut R) -> EnrichedPuzzle {
    EnrichedPuzzle {
        date: format_display_date(&puzzle.date),
        url: puzzle.url().to_string(),
        puzzle_id: puzzle.puzzle_id().to_string(),
        letters: puzzle.letters().to_string(),
        letter_tiles: puzzle.letter_tiles.clone(),
        words: puzzle.words.iter().map(|w| enrich_word(w, rng)).collect(),
        subscribers_only: false,
    }
}

/// Stable ascending sort by display date.
pub fn sort_chronologically(puzzles: &mut [EnrichedPuzzle]) {
    puzzles.sort_by_key(|p| display_date_key(&p.date));
}

/// Flags the last puzzle as subscriber-only and clears the flag everywhere else.
pub fn mark_latest(puzzles: &mut [EnrichedPuzzle]) {
    for puzzle in puzzles.iter_mut() {
        puzzle.subscribers_only = false;
    }
    if let Some(latest) = puzzles.last_mut() {
        latest.subscribers_only = true;
    }
}

pub fn enrich_archive<R: Rng + ?Sized>(archive: &Archive, rng: &mut R) -> Vec<EnrichedPuzzle> {
    let mut puzzles: Vec<EnrichedPuzzle> = archive
        .puzzles
        .iter()
        .map(|p| enrich_puzzle(p, rng))
        .collect();

    sort_chronologically(&mut puzzles);
    mark_latest(&mut puzzles);
    puzzles
}
