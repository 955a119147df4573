//! Token stream for scheme configuration text.
//!
//! Scheme specifications are whitespace-separated words, e.g. `"vanLeer"`,
//! `"downwind phi"`, or `"limitedLinear 0.5"`. The first token names the
//! scheme; each scheme's constructor decides how many of the remaining
//! tokens it consumes and how to interpret them.

use crate::error::StreamError;
use smallvec::SmallVec;

/// A cursor over the tokens of one scheme specification.
///
/// # Examples
///
/// ```
/// use faceflux_core::SchemeStream;
///
/// let mut s = SchemeStream::new("limitedLinear 0.5");
/// assert_eq!(s.next_word().unwrap(), "limitedLinear");
/// assert_eq!(s.next_scalar().unwrap(), 0.5);
/// assert!(s.is_exhausted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemeStream {
    tokens: SmallVec<[String; 4]>,
    pos: usize,
}

impl SchemeStream {
    /// Tokenize `text` on ASCII whitespace.
    pub fn new(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_owned).collect(),
            pos: 0,
        }
    }

    /// The next token without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    /// Consume the next token as a word.
    pub fn next_word(&mut self) -> Result<String, StreamError> {
        let word = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(StreamError::UnexpectedEnd { expected: "word" })?;
        self.pos += 1;
        Ok(word)
    }

    /// Consume the next token as a finite `f64`.
    pub fn next_scalar(&mut self) -> Result<f64, StreamError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or(StreamError::UnexpectedEnd { expected: "scalar" })?;
        let value: f64 = token.parse().map_err(|_| StreamError::InvalidNumber {
            token: token.clone(),
        })?;
        if !value.is_finite() {
            return Err(StreamError::InvalidNumber {
                token: token.clone(),
            });
        }
        self.pos += 1;
        Ok(value)
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[String] {
        &self.tokens[self.pos..]
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

impl From<&str> for SchemeStream {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
