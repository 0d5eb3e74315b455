use rand::Rng;

use crate::scramble::segment::Segment;

/// Scramble the interior letters of a single word using the process RNG.
pub fn scramble_word(word: &str) -> String {
    scramble_word_with_rng(word, &mut rand::thread_rng())
}

/// Scramble with a specific RNG (for testing).
///
/// Words of three characters or fewer pass through unchanged, as do words
/// whose letter portion (trailing punctuation removed) is that short. For
/// everything else the first and last letter stay put and the interior is
/// permuted; trailing punctuation is reattached untouched.
///
/// TODO: isolate leading punctuation; a word quoted on both ends like
/// `'No!'` has its quotes counted as letters, so it falls under the
/// short-word exemption instead of being scrambled.
pub fn scramble_word_with_rng<R: Rng>(word: &str, rng: &mut R) -> String {
    if word.chars().count() <= 3 {
        return word.to_string();
    }

    let segment = Segment::parse(word);
    if segment.letters.chars().count() <= 3 {
        return word.to_string();
    }

    let mut chars: Vec<char> = segment.letters.chars().collect();

    // Partial Fisher-Yates over the open interval (0, len-1): the pivot
    // walks from len-2 down to 2, the swap target is uniform in [1, i-1].
    // The pivot never reaches index 1, so for a four-letter run the two
    // interior characters are always exchanged. This asymmetric bound is
    // part of the contract; callers depend on the resulting distribution.
    let mut i = chars.len() - 2;
    while i > 1 {
        let j = rng.gen_range(1..i);
        chars.swap(i, j);
        i -= 1;
    }

    let mut scrambled: String = chars.into_iter().collect();
    scrambled.push_str(&segment.punctuation);
    scrambled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_short_word_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        for word in ["", "a", "at", "the", "an."] {
            assert_eq!(scramble_word_with_rng(word, &mut rng), word);
        }
    }

    #[test]
    fn test_short_letters_long_punctuation_unchanged() {
        // Token is longer than three characters, letter portion is not.
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scramble_word_with_rng("no!!!", &mut rng), "no!!!");
        assert_eq!(scramble_word_with_rng("yes,'", &mut rng), "yes,'");
    }

    #[test]
    fn test_pure_punctuation_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scramble_word_with_rng("...", &mut rng), "...");
        assert_eq!(scramble_word_with_rng("?!?!?", &mut rng), "?!?!?");
    }

    #[test]
    fn test_quoted_word_exempt_as_short() {
        // Leading quote is counted as a letter, so 'No!' never scrambles.
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scramble_word_with_rng("'No!'", &mut rng), "'No!'");
    }

    #[test]
    fn test_endpoints_fixed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let out = scramble_word_with_rng("programming", &mut rng);
            assert!(out.starts_with('p'));
            assert!(out.ends_with('g'));
        }
    }

    #[test]
    fn test_length_preserved() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = scramble_word_with_rng("extraordinarily", &mut rng);
        assert_eq!(out.chars().count(), "extraordinarily".chars().count());
    }

    #[test]
    fn test_interior_multiset_preserved() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let out = scramble_word_with_rng("scrambled", &mut rng);
            assert_eq!(sorted_chars(&out), sorted_chars("scrambled"));
        }
    }

    #[test]
    fn test_trailing_punctuation_untouched() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let out = scramble_word_with_rng("wait...?!", &mut rng);
            assert!(out.ends_with("...?!"), "punctuation moved in {}", out);
            assert!(out.starts_with('w'));
            assert_eq!(out.chars().count(), 9);
        }
    }

    #[test]
    fn test_hello_comma_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let out = scramble_word_with_rng("hello,", &mut rng);
            let chars: Vec<char> = out.chars().collect();
            assert_eq!(chars.len(), 6);
            assert_eq!(chars[0], 'h');
            assert_eq!(chars[4], 'o');
            assert_eq!(chars[5], ',');
            assert_eq!(sorted_chars(&out[1..4]), sorted_chars("ell"));
        }
    }

    #[test]
    fn test_hello_comma_not_degenerate() {
        // The interior must actually move: with five letters the pivot
        // visits i = 3 then i = 2, and the final forced swap(2, 1) means
        // the identity arrangement is unreachable.
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(scramble_word_with_rng("hello,", &mut rng));
        }
        assert!(!seen.contains("hello,"), "identity should be unreachable");
        assert!(seen.len() >= 2, "interior should take multiple arrangements");
    }

    #[test]
    fn test_four_letter_interior_always_swapped() {
        // With four letters the pivot only ever visits i = 2 and the swap
        // target is forced to 1, so the interior pair always exchanges.
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            assert_eq!(scramble_word_with_rng("abcd", &mut rng), "acbd");
        }
    }

    #[test]
    fn test_four_letters_with_punctuation() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(scramble_word_with_rng("abcd!", &mut rng), "acbd!");
    }

    #[test]
    fn test_plain_scramble_word_keeps_invariants() {
        // thread_rng path: structural checks only.
        let out = scramble_word("javascript");
        assert!(out.starts_with('j'));
        assert!(out.ends_with('t'));
        assert_eq!(sorted_chars(&out), sorted_chars("javascript"));
    }
}
