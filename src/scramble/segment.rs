/// Punctuation characters recognized at the end of a segment.
const TRAILING_PUNCTUATION: [char; 9] = ['.', '!', '?', ',', ':', ';', '\'', '`', '"'];

pub fn is_trailing_punctuation(c: char) -> bool {
    TRAILING_PUNCTUATION.contains(&c)
}

/// A hyphen-delimited sub-unit of a token, decomposed into its letter run
/// and the maximal trailing punctuation run.
///
/// Invariant: `letters + punctuation` reassembles the original segment.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Segment {
    pub letters: String,
    pub punctuation: String,
}

impl Segment {
    /// Decompose a raw segment by peeling punctuation off the end.
    ///
    /// Leading punctuation is not stripped; it counts toward `letters`.
    /// A segment made entirely of punctuation ends up with empty `letters`.
    pub fn parse(raw: &str) -> Self {
        let mut chars: Vec<char> = raw.chars().collect();
        let mut punctuation_chars = Vec::new();

        while let Some(&last_char) = chars.last() {
            if is_trailing_punctuation(last_char) {
                punctuation_chars.push(chars.pop().unwrap());
            } else {
                break;
            }
        }

        // Reverse to maintain original order
        punctuation_chars.reverse();

        Segment {
            letters: chars.into_iter().collect(),
            punctuation: punctuation_chars.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_punctuation() {
        let segment = Segment::parse("hello");
        assert_eq!(segment.letters, "hello");
        assert_eq!(segment.punctuation, "");
    }

    #[test]
    fn test_parse_single_trailing_comma() {
        let segment = Segment::parse("hello,");
        assert_eq!(segment.letters, "hello");
        assert_eq!(segment.punctuation, ",");
    }

    #[test]
    fn test_parse_stacked_punctuation() {
        let segment = Segment::parse("really?!");
        assert_eq!(segment.letters, "really");
        assert_eq!(segment.punctuation, "?!");
    }

    #[test]
    fn test_parse_preserves_punctuation_order() {
        let segment = Segment::parse("what!?'");
        assert_eq!(segment.punctuation, "!?'");
    }

    #[test]
    fn test_parse_leading_punctuation_stays_in_letters() {
        let segment = Segment::parse("'No!'");
        assert_eq!(segment.letters, "'No");
        assert_eq!(segment.punctuation, "!'");
    }

    #[test]
    fn test_parse_pure_punctuation() {
        let segment = Segment::parse("...");
        assert_eq!(segment.letters, "");
        assert_eq!(segment.punctuation, "...");
    }

    #[test]
    fn test_parse_empty() {
        let segment = Segment::parse("");
        assert_eq!(segment.letters, "");
        assert_eq!(segment.punctuation, "");
    }

    #[test]
    fn test_parse_reassembles_original() {
        for raw in ["hello,", "world!!", "'No!'", "a", "", ":;'"] {
            let segment = Segment::parse(raw);
            assert_eq!(format!("{}{}", segment.letters, segment.punctuation), raw);
        }
    }

    #[test]
    fn test_is_trailing_punctuation_full_set() {
        for c in ['.', '!', '?', ',', ':', ';', '\'', '`', '"'] {
            assert!(is_trailing_punctuation(c), "{} should be punctuation", c);
        }
    }

    #[test]
    fn test_is_trailing_punctuation_rejects_hyphen_and_letters() {
        assert!(!is_trailing_punctuation('-'));
        assert!(!is_trailing_punctuation('a'));
        assert!(!is_trailing_punctuation(' '));
    }
}
