pub mod segment;
pub mod text;
pub mod word;

pub use segment::Segment;
pub use text::{scramble_text, scramble_text_with_rng};
pub use word::{scramble_word, scramble_word_with_rng};
