use super::{archive_with_dates, rng, sorted_letters};
use crate::enrich::{
    display_date_key, enrich_archive, enrich_puzzle, enrich_word, format_display_date,
    mark_latest,
};
use bee_harvester::{Archive, Puzzle};
use chrono::NaiveDate;

#[test]
fn test_display_date_format() {
    assert_eq!(format_display_date("2024-01-05"), "January 05, 2024");
    assert_eq!(format_display_date("2023-12-31"), "December 31, 2023");
}

#[test]
fn test_unparseable_date_is_kept() {
    assert_eq!(format_display_date("someday"), "someday");
    assert_eq!(format_display_date(""), "");
    assert_eq!(format_display_date("2024-02-30"), "2024-02-30");
}

#[test]
fn test_display_date_key() {
    assert_eq!(
        display_date_key("March 01, 2024"),
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
    assert_eq!(display_date_key("2024-03-01"), NaiveDate::MIN);
}

#[test]
fn test_enrich_word_sky() {
    let word = enrich_word("sky", &mut rng());

    assert_eq!(word.original, "SKY");
    assert_eq!(word.start_letter, "S");
    assert_eq!(word.first_two, "SK");
    assert_eq!(word.length, 3);
    assert_ne!(word.scrambled, "SKY");
    assert!(["SYK", "KSY", "KYS", "YSK", "YKS"].contains(&word.scrambled.as_str()));
}

#[test]
fn test_enrich_word_trims_and_handles_short_words() {
    let word = enrich_word("  a ", &mut rng());
    assert_eq!(word.original, "A");
    assert_eq!(word.scrambled, "A");
    assert_eq!(word.start_letter, "A");
    assert_eq!(word.first_two, "A");
    assert_eq!(word.length, 1);

    let empty = enrich_word("", &mut rng());
    assert_eq!(empty.original, "");
    assert_eq!(empty.start_letter, "");
    assert_eq!(empty.length, 0);
}

#[test]
fn test_enrich_word_invariants() {
    let mut rng = rng();
    for text in ["city", "silky", "stickily", "icily", "noon"] {
        let word = enrich_word(text, &mut rng);
        assert_eq!(word.length, word.original.chars().count());
        assert!(word.original.starts_with(&word.start_letter));
        assert!(word.original.starts_with(&word.first_two));
        assert_eq!(sorted_letters(&word.scrambled), sorted_letters(&word.original));
        assert_ne!(word.scrambled, word.original);
    }
}

#[test]
fn test_enrich_puzzle_copies_metadata() {
    let mut puzzle = Puzzle::new("2024-01-05", vec!["sky".to_string()]);
    puzzle.attributes = vec![
        ("url".to_string(), "https://example.com/a".to_string()),
        ("puzzleid".to_string(), "21533".to_string()),
        ("letters".to_string(), "YCIKLST".to_string()),
    ];

    let enriched = enrich_puzzle(&puzzle, &mut rng());
    assert_eq!(enriched.date, "January 05, 2024");
    assert_eq!(enriched.url, "https://example.com/a");
    assert_eq!(enriched.puzzle_id, "21533");
    assert_eq!(enriched.letters, "YCIKLST");
    assert!(!enriched.subscribers_only);
}

#[test]
fn test_missing_letters_are_omitted() {
    let mut puzzle = Puzzle::new("2024-01-05", vec![]);
    for (position, letter) in [(1, "Y"), (2, "C"), (4, "K"), (5, "L"), (7, "T")] {
        puzzle.letter_tiles.insert(position, letter.to_string());
    }

    let enriched = enrich_puzzle(&puzzle, &mut rng());
    assert_eq!(
        enriched.letter_tiles.keys().copied().collect::<Vec<_>>(),
        vec![1, 2, 4, 5, 7]
    );
}

#[test]
fn test_archive_sorted_and_latest_flagged() {
    let archive = archive_with_dates(&["2024-01-05", "2024-03-01", "2024-02-10"], &["sky"]);
    let puzzles = enrich_archive(&archive, &mut rng());

    let dates: Vec<&str> = puzzles.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["January 05, 2024", "February 10, 2024", "March 01, 2024"]
    );
    let flagged: Vec<bool> = puzzles.iter().map(|p| p.subscribers_only).collect();
    assert_eq!(flagged, vec![false, false, true]);
}

#[test]
fn test_unparseable_dates_sort_first() {
    let archive = archive_with_dates(&["2024-02-10", "not-a-date", "2024-01-05", ""], &[]);
    let puzzles = enrich_archive(&archive, &mut rng());

    let dates: Vec<&str> = puzzles.iter().map(|p| p.date.as_str()).collect();
    // Ties keep source order
    assert_eq!(
        dates,
        vec!["not-a-date", "", "January 05, 2024", "February 10, 2024"]
    );
    assert!(puzzles[3].subscribers_only);
}

#[test]
fn test_mark_latest_resets_previous_flags() {
    let archive = archive_with_dates(&["2024-01-05", "2024-01-06"], &[]);
    let mut puzzles = enrich_archive(&archive, &mut rng());
    puzzles[0].subscribers_only = true;

    mark_latest(&mut puzzles);
    assert!(!puzzles[0].subscribers_only);
    assert!(puzzles[1].subscribers_only);
}

#[test]
fn test_empty_archive() {
    let puzzles = enrich_archive(&Archive::default(), &mut rng());
    assert!(puzzles.is_empty());
}
