//! Escaping and cursor helpers shared by the textual codecs.
//!
//! All bridge formats use the same escaping rule: a backslash makes the next
//! character literal. Each format picks its own set of reserved characters;
//! the backslash itself is always reserved.

use crate::error::{DecodeError, DecodeResult};

/// Append `raw` to `out`, backslash-escaping `\` and every char in `reserved`.
pub fn escape_into(out: &mut String, raw: &str, reserved: &[char]) {
    for ch in raw.chars() {
        if ch == '\\' || reserved.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Forward-only reader over a textual payload.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consume one char.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume one char, failing at end of input.
    pub fn next_char(&mut self) -> DecodeResult<char> {
        let offset = self.pos;
        self.bump().ok_or(DecodeError::UnexpectedEnd { offset })
    }

    /// Consume `expected` or fail.
    pub fn expect(&mut self, expected: char) -> DecodeResult<()> {
        let offset = self.pos;
        match self.bump() {
            Some(ch) if ch == expected => Ok(()),
            Some(found) => Err(DecodeError::Expected {
                expected,
                found,
                offset,
            }),
            None => Err(DecodeError::UnexpectedEnd { offset }),
        }
    }

    /// Read and unescape text up to the first unescaped char in `stops`.
    ///
    /// The stop char is left unconsumed. End of input also terminates.
    pub fn read_until(&mut self, stops: &[char]) -> DecodeResult<String> {
        let mut out = String::new();
        while let Some(ch) = self.peek() {
            if stops.contains(&ch) {
                break;
            }
            let offset = self.pos;
            self.bump();
            if ch == '\\' {
                match self.bump() {
                    Some(escaped) => out.push(escaped),
                    None => return Err(DecodeError::DanglingEscape { offset }),
                }
            } else {
                out.push(ch);
            }
        }
        Ok(out)
    }

    /// Fail if anything is left.
    pub fn finish(&self) -> DecodeResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(DecodeError::TrailingInput { offset: self.pos })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(raw: &str, reserved: &[char]) -> String {
        let mut out = String::new();
        escape_into(&mut out, raw, reserved);
        out
    }

    #[test]
    fn escape_reserved_and_backslash() {
        assert_eq!(escape("a=b", &['=']), "a\\=b");
        assert_eq!(escape("a\\b", &[]), "a\\\\b");
        assert_eq!(escape("plain", &['=', ',']), "plain");
    }

    #[test]
    fn read_until_unescapes() {
        let mut cursor = Cursor::new("a\\=b=rest");
        assert_eq!(cursor.read_until(&['=']).unwrap(), "a=b");
        assert_eq!(cursor.peek(), Some('='));
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn read_until_dangling_escape() {
        let mut cursor = Cursor::new("abc\\");
        assert_eq!(
            cursor.read_until(&[';']),
            Err(DecodeError::DanglingEscape { offset: 3 })
        );
    }

    #[test]
    fn expect_reports_found_char() {
        let mut cursor = Cursor::new("x");
        assert_eq!(
            cursor.expect('{'),
            Err(DecodeError::Expected {
                expected: '{',
                found: 'x',
                offset: 0
            })
        );
    }

    #[test]
    fn finish_detects_trailing() {
        let mut cursor = Cursor::new("ab");
        cursor.bump();
        assert_eq!(cursor.finish(), Err(DecodeError::TrailingInput { offset: 1 }));
        cursor.bump();
        assert!(cursor.finish().is_ok());
    }
}
