//! The raw word archive: an XML document of dated `<puzzle>` records.
//!
//! The harvester appends to it and the builder reads it. Appending splices a
//! new record in front of the closing root tag, so hand-curated content the
//! model does not read survives. Element bodies are read untrimmed.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::xml::XmlDocument;

/// Root element used when the harvester creates a new archive.
pub const DEFAULT_ROOT: &str = "spelling_bees";

/// Highest positional letter element (`letter1`..`letter7`).
pub const LETTER_POSITIONS: u8 = 7;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read archive {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed archive XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed archive attribute: {0}")]
    Attr(#[from] AttrError),
    #[error("archive has no root element")]
    MissingRoot,
    #[error("failed to write archive XML: {0}")]
    Write(#[from] std::io::Error),
    #[error("archive XML is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// One day's puzzle as stored in the raw archive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Puzzle {
    /// Compact `YYYY-MM-DD` date, empty when the element carries none.
    pub date: String,
    /// Every other attribute, in document order.
    pub attributes: Vec<(String, String)>,
    /// Non-empty `letterN` bodies keyed by position.
    pub letter_tiles: BTreeMap<u8, String>,
    pub words: Vec<String>,
}

impl Puzzle {
    pub fn new(date: &str, words: Vec<String>) -> Self {
        Self {
            date: date.to_string(),
            words,
            ..Default::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn url(&self) -> &str {
        self.attribute("url").unwrap_or("")
    }

    pub fn puzzle_id(&self) -> &str {
        self.attribute("puzzleid").unwrap_or("")
    }

    pub fn letters(&self) -> &str {
        self.attribute("letters").unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Archive {
    pub root: String,
    pub puzzles: Vec<Puzzle>,
}

impl Default for Archive {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            puzzles: Vec::new(),
        }
    }
}

impl Archive {
    /// Reads the archive at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path).map_err(|source| ArchiveError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = Self::parse(&xml)?;
        log::debug!(
            "Read {} puzzles from {}",
            archive.puzzles.len(),
            path.display()
        );
        Ok(archive)
    }

    /// Returns the raw text of the archive at `path`, or `None` if the file
    /// does not exist yet.
    pub fn read_source<P: AsRef<Path>>(path: P) -> Result<Option<String>, ArchiveError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No archive at {}, starting a new one", path.display());
            return Ok(None);
        }
        fs::read_to_string(path)
            .map(Some)
            .map_err(|source| ArchiveError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn parse(xml: &str) -> Result<Self, ArchiveError> {
        // Bodies are kept untrimmed; whitespace between elements is discarded
        // when the next element opens or closes.
        let mut reader = Reader::from_str(xml);

        let mut root: Option<String> = None;
        let mut puzzles = Vec::new();
        // Element names from the root down to the current element.
        let mut path: Vec<Vec<u8>> = Vec::new();
        let mut current: Option<Puzzle> = None;
        let mut body = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    let name = e.name().as_ref().to_vec();
                    open_element(&mut root, &mut current, &path, e, &name)?;
                    body.clear();
                    path.push(name);
                }
                Event::Empty(ref e) => {
                    let name = e.name().as_ref().to_vec();
                    open_element(&mut root, &mut current, &path, e, &name)?;
                    body.clear();
                    close_element(&mut puzzles, &mut current, &path, &name, &body);
                }
                Event::End(_) => {
                    if let Some(name) = path.pop() {
                        close_element(&mut puzzles, &mut current, &path, &name, &body);
                    }
                    body.clear();
                }
                Event::Text(ref t) => body.push_str(&t.unescape()?),
                Event::CData(ref c) => body.push_str(&String::from_utf8_lossy(c)),
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self {
            root: root.ok_or(ArchiveError::MissingRoot)?,
            puzzles,
        })
    }

    pub fn dates(&self) -> HashSet<&str> {
        self.puzzles.iter().map(|p| p.date.as_str()).collect()
    }

    pub fn push(&mut self, puzzle: Puzzle) {
        self.puzzles.push(puzzle);
    }

    pub fn to_xml(&self) -> Result<String, ArchiveError> {
        let mut doc = XmlDocument::new(&self.root)?;
        for puzzle in &self.puzzles {
            write_puzzle(&mut doc, puzzle)?;
        }
        doc.finish()
    }
}

/// Inserts `puzzle` as the last child of the root element of `xml`.
///
/// Everything already in the document is kept byte for byte, including
/// elements the archive model does not read.
pub fn append_puzzle(xml: &str, puzzle: &Puzzle) -> Result<String, ArchiveError> {
    let mut fragment = XmlDocument::fragment();
    write_puzzle(&mut fragment, puzzle)?;
    let fragment: String = fragment
        .finish()?
        .lines()
        .map(|line| format!("  {}\n", line))
        .collect();

    let mut out = String::with_capacity(xml.len() + fragment.len() + 1);
    match find_root_close(xml)? {
        RootClose::End { at } => {
            let (head, tail) = xml.split_at(at);
            out.push_str(head);
            if !head.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&fragment);
            out.push_str(tail);
        }
        RootClose::Empty { start, end, name } => {
            let open = xml[start..end].trim_end_matches("/>").trim_end();
            out.push_str(&xml[..start]);
            out.push_str(open);
            out.push_str(">\n");
            out.push_str(&fragment);
            out.push_str(&format!("</{}>", name));
            out.push_str(&xml[end..]);
        }
    }
    Ok(out)
}

enum RootClose {
    /// Byte offset of the root's closing tag.
    End { at: usize },
    /// A self-closing root spanning `start..end`.
    Empty {
        start: usize,
        end: usize,
        name: String,
    },
}

fn find_root_close(xml: &str) -> Result<RootClose, ArchiveError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let end = reader.buffer_position() as usize;
                    let at = xml[..end].rfind("</").ok_or(ArchiveError::MissingRoot)?;
                    return Ok(RootClose::End { at });
                }
            }
            Event::Empty(ref e) if depth == 0 => {
                let end = reader.buffer_position() as usize;
                let start = xml[..end].rfind('<').ok_or(ArchiveError::MissingRoot)?;
                return Ok(RootClose::Empty {
                    start,
                    end,
                    name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                });
            }
            Event::Eof => return Err(ArchiveError::MissingRoot),
            _ => {}
        }
    }
}

fn write_puzzle(doc: &mut XmlDocument, puzzle: &Puzzle) -> Result<(), ArchiveError> {
    let mut attrs: Vec<(&str, &str)> = vec![("date", puzzle.date.as_str())];
    attrs.extend(
        puzzle
            .attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );
    doc.start("puzzle", &attrs)?;

    for (position, letter) in &puzzle.letter_tiles {
        doc.text_element(&format!("letter{}", position), letter)?;
    }
    for word in &puzzle.words {
        doc.text_element("word", word)?;
    }

    doc.end("puzzle")
}

/// `letter3` -> `Some(3)`; anything outside `letter1`..`letter7` -> `None`.
pub fn letter_position(tag: &[u8]) -> Option<u8> {
    let digits = tag.strip_prefix(b"letter")?;
    let position: u8 = std::str::from_utf8(digits).ok()?.parse().ok()?;
    (1..=LETTER_POSITIONS)
        .contains(&position)
        .then_some(position)
}

fn open_element(
    root: &mut Option<String>,
    current: &mut Option<Puzzle>,
    path: &[Vec<u8>],
    e: &BytesStart,
    name: &[u8],
) -> Result<(), ArchiveError> {
    match path.len() {
        0 => *root = Some(String::from_utf8_lossy(name).into_owned()),
        1 if name == b"puzzle" => {
            let mut puzzle = Puzzle::default();
            for attr in e.attributes() {
                let attr = attr?;
                let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                let value = attr.unescape_value()?.into_owned();
                if key == "date" {
                    puzzle.date = value;
                } else {
                    puzzle.attributes.push((key, value));
                }
            }
            *current = Some(puzzle);
        }
        _ => {}
    }
    Ok(())
}

/// `path` holds the ancestors of the element being closed.
fn close_element(
    puzzles: &mut Vec<Puzzle>,
    current: &mut Option<Puzzle>,
    path: &[Vec<u8>],
    name: &[u8],
    body: &str,
) {
    match path.len() {
        1 if name == b"puzzle" => {
            if let Some(puzzle) = current.take() {
                puzzles.push(puzzle);
            }
        }
        2 if path[1] == b"puzzle" => {
            let Some(puzzle) = current.as_mut() else {
                return;
            };
            if name == b"word" {
                puzzle.words.push(body.to_string());
            } else if let Some(position) = letter_position(name) {
                if !body.is_empty() {
                    puzzle.letter_tiles.insert(position, body.to_string());
                }
            }
        }
        _ => {}
    }
}
