use bee_harvester::{ArchiveError, XmlDocument};

use crate::enrich::{EnrichedPuzzle, EnrichedWord};

/// Root element of the enriched archive.
pub const ENRICHED_ROOT: &str = "bees";

pub fn render_enriched(puzzles: &[EnrichedPuzzle]) -> Result<String, ArchiveError> {
    let mut doc = XmlDocument::new(ENRICHED_ROOT)?;

    for puzzle in puzzles {
        let mut attrs = vec![
            ("date", puzzle.date.as_str()),
            ("url", puzzle.url.as_str()),
            ("puzzleid", puzzle.puzzle_id.as_str()),
            ("letters", puzzle.letters.as_str()),
        ];
        if puzzle.subscribers_only {
            attrs.push(("subscribersonly", "yes"));
        }
        doc.start("puzzle", &attrs)?;

        for (position, letter) in &puzzle.letter_tiles {
            doc.text_element(&format!("letter{}", position), letter)?;
        }

        doc.start("words", &[])?;
        for word in &puzzle.words {
            write_word(&mut doc, word)?;
        }
        doc.end("words")?;

        doc.end("puzzle")?;
    }

    doc.finish()
}

fn write_word(doc: &mut XmlDocument, word: &EnrichedWord) -> Result<(), ArchiveError> {
    let length = word.length.to_string();
    doc.empty(
        "word",
        &[
            ("original", word.original.as_str()),
            ("scrambled", word.scrambled.as_str()),
            ("startletter", word.start_letter.as_str()),
            ("firsttwo", word.first_two.as_str()),
            ("length", length.as_str()),
        ],
    )
}
