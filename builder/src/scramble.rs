use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffles tried before falling back to reversal.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 10;

/// Returns an uppercase permutation of `word` that differs from it when a
/// shuffle finds one within [`MAX_SHUFFLE_ATTEMPTS`] tries.
///
/// Otherwise the reversed word is returned, which is still equal to the
/// input for palindromes and single-letter repeats like `AA`.
pub fn scramble_word<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let word = word.to_uppercase();
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() <= 1 {
        return word;
    }

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return candidate;
        }
    }

    log::debug!("No shuffle of {} differed, using its reversal", word);
    word.chars().rev().collect()
}
