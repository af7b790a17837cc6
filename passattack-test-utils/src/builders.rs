//! Wordlist fixture builders

use std::io::Write;
use tempfile::NamedTempFile;

/// Builder for on-disk wordlist fixtures
///
/// Produces a real temporary file so tests exercise the same streaming
/// path as production wordlists. The file is removed when the returned
/// handle drops.
pub struct WordlistBuilder {
    lines: Vec<String>,
}

impl WordlistBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a single word
    pub fn with_word(mut self, word: &str) -> Self {
        self.lines.push(word.to_string());
        self
    }

    /// Append several words
    pub fn with_words(mut self, words: &[&str]) -> Self {
        self.lines.extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Append an empty line (skipped by the dictionary stream)
    pub fn with_blank_line(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Append `count` filler words, `prefix0` through `prefix{count-1}`
    pub fn with_filler(mut self, prefix: &str, count: usize) -> Self {
        for i in 0..count {
            self.lines.push(format!("{prefix}{i}"));
        }
        self
    }

    /// Write the wordlist to a temporary file
    pub fn build(self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp wordlist");
        for line in &self.lines {
            writeln!(file, "{line}").expect("write temp wordlist");
        }
        file.flush().expect("flush temp wordlist");
        file
    }
}

impl Default for WordlistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_writes_lines_in_order() {
        let file = WordlistBuilder::new()
            .with_word("first")
            .with_blank_line()
            .with_words(&["second", "third"])
            .build();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "first\n\nsecond\nthird\n");
    }

    #[test]
    fn test_filler_words_are_numbered() {
        let file = WordlistBuilder::new().with_filler("w", 3).build();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "w0\nw1\nw2\n");
    }
}
