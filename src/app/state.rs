/// Links each scrambled word back to its original by position.
///
/// Both sides are split on the single space character, the same rule the
/// scrambler uses to build its output, so the two vectors always have the
/// same length and an index into one addresses the same word in the other.
pub struct HoverState {
    pub original: Vec<String>,
    pub scrambled: Vec<String>,
    pub selected: usize,
}

impl HoverState {
    pub fn new(original_text: &str, scrambled_text: &str) -> Self {
        Self {
            original: split_words(original_text),
            scrambled: split_words(scrambled_text),
            selected: 0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.scrambled.len()
    }

    pub fn selected_original(&self) -> Option<&str> {
        self.original.get(self.selected).map(String::as_str)
    }

    pub fn selected_scrambled(&self) -> Option<&str> {
        self.scrambled.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.selected < self.scrambled.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

fn split_words(text: &str) -> Vec<String> {
    text.split(' ').map(str::to_string).collect()
}
