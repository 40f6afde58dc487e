//! Pending numeric entry, edited digit by digit before it is committed.

use std::fmt;

use crate::{Error, Result};

/// Decimal separator accepted by the entry buffer.
pub const SEPARATOR: char = '.';

/// Uncommitted number text: digits, at most one [`SEPARATOR`], and an
/// optional leading sign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
}

impl EntryBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a single decimal digit given as text.
    ///
    /// The text must parse as an integer in `0..=9`; anything else is
    /// ignored, including multi-digit integers such as `"12"`, which are
    /// dropped rather than appended. Accepted text is appended as its
    /// canonical digit, so `"07"` and `"+7"` both append `7`.
    pub fn append_digit(&mut self, digit: &str) {
        match digit.parse::<u8>() {
            Ok(d) if d <= 9 => {
                self.text.push(char::from(b'0' + d));
                tracing::trace!(entry = %self.text, "digit appended");
            }
            _ => tracing::debug!(digit, "ignoring malformed digit"),
        }
    }

    /// Append the separator unless one is already present.
    pub fn append_separator(&mut self) {
        if !self.text.contains(SEPARATOR) {
            self.text.push(SEPARATOR);
        }
    }

    /// Flip the leading sign.
    ///
    /// An empty buffer becomes `-`, a leading `+` becomes `-` and vice versa,
    /// and unsigned text gets a `-` prepended. Toggling twice therefore turns
    /// `5` into `+5`, not back into `5`.
    pub fn toggle_sign(&mut self) {
        match self.text.chars().next() {
            None => self.text.push('-'),
            Some('+') => self.text.replace_range(..1, "-"),
            Some('-') => self.text.replace_range(..1, "+"),
            Some(_) => self.text.insert(0, '-'),
        }
        tracing::trace!(entry = %self.text, "sign toggled");
    }

    /// Parse the pending text. Returns `None` when nothing has been entered.
    pub fn parse(&self) -> Result<Option<f64>> {
        if self.text.is_empty() {
            return Ok(None);
        }
        self.text
            .parse::<f64>()
            .map(Some)
            .map_err(|source| Error::Parse {
                text: self.text.clone(),
                source,
            })
    }

    /// Replace the buffer contents without validation.
    ///
    /// Only the test harness uses this, to reach states the editing
    /// operations cannot produce.
    #[cfg(any(test, feature = "test-harness"))]
    pub fn set_raw(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl fmt::Display for EntryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
