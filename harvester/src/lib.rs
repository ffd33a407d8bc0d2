// Export the harvester modules
pub mod archive;
pub mod harvest;
pub mod io;
pub mod xml;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::archive::{Archive, ArchiveError, Puzzle};
pub use crate::harvest::{
    extract_answers, extract_balanced_object, extract_game_day, fetch_html,
    find_game_data_script, harvest, HarvestOutcome, DEFAULT_ARCHIVE, DEFAULT_USER_AGENT,
    PUZZLE_URL,
};
pub use crate::xml::XmlDocument;
