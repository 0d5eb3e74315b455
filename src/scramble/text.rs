use rand::Rng;

use crate::scramble::word::scramble_word_with_rng;

/// Scramble every qualifying word in `text` using the process RNG.
pub fn scramble_text(text: &str) -> String {
    scramble_text_with_rng(text, &mut rand::thread_rng())
}

/// Scramble with a specific RNG (for testing).
///
/// Tokens are delimited by single space characters, never collapsed: empty
/// tokens from doubled or leading spaces survive the round trip because they
/// fall under the short-word exemption. Hyphen-compounds are split on `-`
/// and each segment is scrambled on its own, so hyphen count and position
/// are preserved exactly.
pub fn scramble_text_with_rng<R: Rng>(text: &str, rng: &mut R) -> String {
    let scrambled: Vec<String> = text
        .split(' ')
        .map(|token| {
            if token.contains('-') {
                token
                    .split('-')
                    .map(|segment| scramble_word_with_rng(segment, rng))
                    .collect::<Vec<String>>()
                    .join("-")
            } else {
                scramble_word_with_rng(token, rng)
            }
        })
        .collect();
    scrambled.join(" ")
}
