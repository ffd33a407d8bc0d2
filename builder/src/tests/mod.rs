use std::fs;
use std::path::{Path, PathBuf};

use bee_harvester::{Archive, Puzzle};
use rand::SeedableRng;
use rand_pcg::Pcg32;

pub mod enrich_tests;

pub fn rng() -> Pcg32 {
    Pcg32::seed_from_u64(7)
}

/// A raw archive holding one puzzle per date, each with the given words.
pub fn archive_with_dates(dates: &[&str], words: &[&str]) -> Archive {
    let mut archive = Archive::default();
    for date in dates {
        archive.push(Puzzle::new(
            date,
            words.iter().map(|w| w.to_string()).collect(),
        ));
    }
    archive
}

pub fn write_raw(dir: &Path, archive: &Archive) -> PathBuf {
    let path = dir.join("bees.xml");
    fs::write(&path, archive.to_xml().unwrap()).unwrap();
    path
}

pub fn sorted_letters(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}
