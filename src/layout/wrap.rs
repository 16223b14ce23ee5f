//! Greedy word wrapping by character count.

use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Wrap `text` at `width` characters.
///
/// The returned value is cheap to copy; call [`WordWrap::lines`] as many times
/// as needed, each call restarts from the first sub-line.
pub fn wrap(text: &str, width: usize) -> WordWrap<'_> {
    WordWrap::new(text, width)
}

/// A restartable greedy word wrap over borrowed text.
///
/// Breaks happen only at whitespace and runs of whitespace collapse to a single
/// space. A word longer than the width is kept whole on its own line. Empty or
/// whitespace-only text yields exactly one empty line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWrap<'a> {
    text: &'a str,
    width: usize,
}

impl<'a> WordWrap<'a> {
    /// Create a wrap. A width of 0 behaves like 1.
    pub fn new(text: &'a str, width: usize) -> Self {
        Self {
            text,
            width: width.max(1),
        }
    }

    /// Iterate the wrapped lines from the start.
    pub fn lines(&self) -> WrappedLines<'a> {
        WrappedLines {
            words: self.text.split_whitespace().peekable(),
            width: self.width,
            emitted: false,
        }
    }

    /// The effective width.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<'a> IntoIterator for WordWrap<'a> {
    type Item = String;
    type IntoIter = WrappedLines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

/// Iterator over wrapped lines. See [`WordWrap`].
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    words: Peekable<SplitWhitespace<'a>>,
    width: usize,
    emitted: bool,
}

impl Iterator for WrappedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let Some(first) = self.words.next() else {
            if self.emitted {
                return None;
            }
            self.emitted = true;
            return Some(String::new());
        };
        self.emitted = true;

        let mut line = String::from(first);
        let mut len = first.chars().count();
        while let Some(word) = self.words.peek() {
            let word_len = word.chars().count();
            if len + 1 + word_len > self.width {
                break;
            }
            line.push(' ');
            line.push_str(word);
            len += 1 + word_len;
            self.words.next();
        }
        Some(line)
    }
}
