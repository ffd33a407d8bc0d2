use std::path::{Path, PathBuf};

use bee_harvester::io::overwrite_file;
use bee_harvester::Archive;
use rand::Rng;

use crate::enrich::enrich_archive;
use crate::error::BuildError;
use crate::output::render_enriched;

pub const DEFAULT_INPUT: &str = "xml/bees.xml";
pub const DEFAULT_OUTPUT: &str = "xml/beesplus.xml";

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub puzzles: usize,
    pub words: usize,
}

impl std::fmt::Display for BuildReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' created.", self.output.display())
    }
}

/// Rebuilds the enriched archive at `output` from the raw archive at `input`.
///
/// Nothing is written when the input is missing or unreadable.
pub fn build<R: Rng + ?Sized>(
    input: &Path,
    output: &Path,
    rng: &mut R,
) -> Result<BuildReport, BuildError> {
    if !input.exists() {
        return Err(BuildError::MissingInput(input.to_path_buf()));
    }

    let archive = Archive::load(input).map_err(|source| BuildError::ReadArchive {
        path: input.to_path_buf(),
        source,
    })?;

    let puzzles = enrich_archive(&archive, rng);
    let words = puzzles.iter().map(|p| p.words.len()).sum();
    log::info!("Enriched {} puzzles with {} words", puzzles.len(), words);

    let xml = render_enriched(&puzzles)?;
    overwrite_file(output, &xml).map_err(|source| BuildError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(BuildReport {
        output: output.to_path_buf(),
        puzzles: puzzles.len(),
        words,
    })
}
