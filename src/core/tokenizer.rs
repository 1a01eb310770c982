//! Tokenizer - lazy extraction of word tokens from a byte stream
//!
//! A token is a maximal run of ASCII letters and digits. Everything else,
//! including any non-ASCII byte, separates tokens. Tokens are case-folded
//! to lowercase before they are handed out, so every token is already in
//! the `[0-9a-z]` alphabet the word trie accepts.
//!
//! ```ignore
//! let tokens: Vec<String> = Tokenizer::new("Cat, cat!".as_bytes())
//!     .collect::<std::io::Result<_>>()?;
//! assert_eq!(tokens, ["cat", "cat"]);
//! ```

use std::io::{BufRead, ErrorKind};

/// True for bytes that belong to a word
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Streaming tokenizer over any buffered reader
///
/// Yields `Ok(token)` until end of stream, then `None`. A read failure is
/// yielded once as `Err` and the tokenizer is finished afterwards.
pub struct Tokenizer<R> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            finished: false,
        }
    }

    /// Read the next token, `Ok(None)` at end of stream
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        let mut word = String::new();

        loop {
            let (consumed, complete) = {
                let available = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };

                if available.is_empty() {
                    return Ok(if word.is_empty() { None } else { Some(word) });
                }

                let mut consumed = 0;
                let mut complete = false;
                for &b in available {
                    if is_word_byte(b) {
                        word.push(b.to_ascii_lowercase() as char);
                    } else if !word.is_empty() {
                        complete = true;
                        break;
                    }
                    consumed += 1;
                }
                (consumed, complete)
            };

            self.reader.consume(consumed);
            if complete {
                return Ok(Some(word));
            }
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Case-fold a single word and check it stays inside the alphabet.
///
/// Used for words that arrive one per line (the ignore list) rather than
/// through the tokenizer. Returns `None` for anything that is not exactly
/// one token.
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(is_word_byte) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}
