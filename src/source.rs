//! Binary byte-stream access to an ACE (or XSDIR) file, plus a line cursor used by
//! the seeker and header parser.
//!
//! Grounded on spec §4.13/§9: "open ACE files as binary byte streams... this rules
//! out text-mode on host systems that translate newlines." `memmap2` (already a
//! teacher dependency, previously used for the binary "PACE" format this crate
//! drops) gives a stable, zero-copy byte view of the file regardless of platform
//! newline translation.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::Result;

/// A memory-mapped ACE or XSDIR file, exposed as raw bytes. ACE files are ASCII, so
/// the bytes are interpreted as UTF-8 lossily only at tokenization time; position
/// arithmetic always operates on the raw byte offsets.
pub struct AceSource {
    mmap: Mmap,
}

impl AceSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        // Safety: the mapping is read-only and this process does not assume
        // exclusive access to the backing file; concurrent external mutation during
        // a decode is a pre-existing risk inherent to mmap-based file access and is
        // outside this crate's resource-discipline scope (spec §5).
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(AceSource { mmap })
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.mmap).unwrap_or_else(|e| {
            std::str::from_utf8(&self.mmap[..e.valid_up_to()]).unwrap_or("")
        })
    }
}

/// A cursor over an in-memory text buffer that tracks a current byte offset and
/// reads whole lines at a time, used by both the seeker (line-granularity scanning
/// with rewind) and the header parser (fixed counts of lines/tokens).
pub struct LineCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        LineCursor { text, pos: 0 }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Byte offset of the cursor, usable with [`LineCursor::rewind_to`].
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn rewind_to(&mut self, offset: usize) {
        self.pos = offset;
    }

    /// Read and consume the next line (without its trailing newline), or `None` at
    /// EOF.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.at_eof() {
            return None;
        }
        let rest = &self.text[self.pos..];
        match rest.find('\n') {
            Some(idx) => {
                self.pos += idx + 1;
                Some(rest[..idx].trim_end_matches('\r'))
            }
            None => {
                self.pos = self.text.len();
                Some(rest.trim_end_matches('\r'))
            }
        }
    }

    /// Consume `n` lines without returning them.
    pub fn skip_lines(&mut self, n: usize) {
        for _ in 0..n {
            if self.next_line().is_none() {
                break;
            }
        }
    }

    /// All remaining text from the cursor's current position onward, as a flat
    /// token iterator (used to slurp the XSS payload after the header/NXS/JXS).
    pub fn remaining_tokens(&self) -> impl Iterator<Item = &'a str> {
        self.text[self.pos..].split_ascii_whitespace()
    }

    /// Peek the first whitespace-delimited token of the remaining text without
    /// consuming anything.
    pub fn peek_token(&self) -> Option<&'a str> {
        self.remaining_tokens().next()
    }

    /// Consume and return the next whitespace-delimited token, advancing the
    /// cursor to just past it. Used by the header parser, which must interleave
    /// token-level reads (version, ids, counts) with line-level skips (free-form
    /// and comment lines).
    pub fn next_token(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.is_empty() {
            self.pos = self.text.len();
            return None;
        }
        let leading_ws = rest.len() - trimmed.len();
        let tok_len = trimmed
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(trimmed.len());
        let start = self.pos + leading_ws;
        self.pos = start + tok_len;
        Some(&self.text[start..start + tok_len])
    }

    /// Byte offset of the start of the line containing the cursor's current
    /// position (used to rewind before re-counting lines for header-length math).
    pub fn current_line_start(&self) -> usize {
        self.text[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_cursor_reads_and_rewinds() {
        let text = "line one\nline two\nline three";
        let mut cur = LineCursor::new(text);
        assert_eq!(cur.next_line(), Some("line one"));
        let mark = cur.offset();
        assert_eq!(cur.next_line(), Some("line two"));
        cur.rewind_to(mark);
        assert_eq!(cur.next_line(), Some("line two"));
        assert_eq!(cur.next_line(), Some("line three"));
        assert_eq!(cur.next_line(), None);
    }

    #[test]
    fn next_token_advances_past_whitespace() {
        let mut cur = LineCursor::new("  1001.80c   0.999167\n2.5301E-08");
        assert_eq!(cur.next_token(), Some("1001.80c"));
        assert_eq!(cur.next_token(), Some("0.999167"));
        assert_eq!(cur.next_token(), Some("2.5301E-08"));
        assert_eq!(cur.next_token(), None);
    }

    #[test]
    fn remaining_tokens_split_on_whitespace() {
        let text = "a b  c\nd";
        let mut cur = LineCursor::new(text);
        cur.next_line();
        let toks: Vec<_> = cur.remaining_tokens().collect();
        assert_eq!(toks, vec!["d"]);
    }
}
