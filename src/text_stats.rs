// 📝 Text Statistics - counts derived from a text blob, recomputed on every edit

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Average reading speed, words per minute
pub const WORDS_PER_MINUTE: usize = 200;

fn paragraph_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"))
}

fn word_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w").expect("word start pattern is valid"))
}

// ============================================================================
// STATS
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Minutes, rounded up
    pub reading_time: usize,
}

/// Snapshot statistics for `text`. Characters are counted as Unicode scalar values.
pub fn analyze(text: &str) -> TextStats {
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

    if text.trim().is_empty() {
        return TextStats {
            characters,
            characters_no_spaces,
            ..TextStats::default()
        };
    }

    let words = text.split_whitespace().count();
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let paragraphs = paragraph_break().split(text).count();

    TextStats {
        characters,
        characters_no_spaces,
        words,
        sentences,
        paragraphs,
        reading_time: words.div_ceil(WORDS_PER_MINUTE),
    }
}

// ============================================================================
// CASE TRANSFORMS
// ============================================================================

pub fn to_title_case(text: &str) -> String {
    word_start()
        .replace_all(text, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

// ============================================================================
// WORD COUNTER STATE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordCounter {
    pub text: String,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> TextStats {
        analyze(&self.text)
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn uppercase(&mut self) {
        self.text = self.text.to_uppercase();
    }

    pub fn lowercase(&mut self) {
        self.text = self.text.to_lowercase();
    }

    pub fn title_case(&mut self) {
        self.text = to_title_case(&self.text);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = analyze("");
        assert_eq!(stats, TextStats::default());
    }

    #[test]
    fn test_whitespace_only_counts_characters() {
        let stats = analyze("  \n ");
        assert_eq!(stats.characters, 4);
        assert_eq!(stats.characters_no_spaces, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.sentences, 0);
        assert_eq!(stats.paragraphs, 0);
    }

    #[test]
    fn test_single_sentence() {
        let stats = analyze("Hello world.");
        assert_eq!(stats.characters, 12);
        assert_eq!(stats.characters_no_spaces, 11);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.reading_time, 1);
    }

    #[test]
    fn test_sentence_runs_collapse() {
        let stats = analyze("Wait... what?! Really. ");
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "First paragraph.\n\nSecond one.\n   \n\nThird.\nStill third.";
        let stats = analyze(text);
        assert_eq!(stats.paragraphs, 3);
        assert_eq!(stats.sentences, 4);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(analyze(&text).reading_time, 2);

        let text = vec!["word"; 200].join(" ");
        assert_eq!(analyze(&text).reading_time, 1);
    }

    #[test]
    fn test_unicode_characters() {
        let stats = analyze("héllo wörld");
        assert_eq!(stats.characters, 11);
        assert_eq!(stats.characters_no_spaces, 10);
    }

    #[test]
    fn test_case_transforms() {
        let mut counter = WordCounter::new();
        counter.set_text("the quick brown-fox");

        counter.title_case();
        assert_eq!(counter.text, "The Quick Brown-Fox");

        counter.uppercase();
        assert_eq!(counter.text, "THE QUICK BROWN-FOX");

        counter.lowercase();
        assert_eq!(counter.text, "the quick brown-fox");

        counter.backspace();
        assert_eq!(counter.text, "the quick brown-fo");

        counter.clear();
        assert_eq!(counter.stats().words, 0);
    }
}
