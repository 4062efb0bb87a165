//! Advance a character stream to a named nuclide's first header token, inside a
//! monolithic concatenation of many ACE tables.
//!
//! Grounded on `acefile.cpp::seek`: an optional start-line hint short-circuits
//! leading lines, then each subsequent line's first (ZAID-style v1 header) or
//! second (SZAX-style v2 header) whitespace field is compared against the target
//! identifier.

use std::path::Path;

use crate::error::{AceError, Result};
use crate::source::LineCursor;

/// Position `cursor` at the start of the line whose first or second
/// whitespace-delimited field equals `id`. An empty `id` is a no-op (accept the
/// first nuclide in the file). `start_line`, if non-zero, skips `start_line - 1`
/// lines unconditionally before scanning begins.
pub fn seek(cursor: &mut LineCursor, id: &str, start_line: usize, file: &Path) -> Result<()> {
    if start_line != 0 {
        cursor.skip_lines(start_line - 1);
    }
    if id.is_empty() {
        return Ok(());
    }

    loop {
        let mark = cursor.offset();
        let Some(line) = cursor.next_line() else {
            return Err(AceError::NuclideNotFound { id: id.to_string(), file: file.to_path_buf() });
        };
        let mut fields = line.split_ascii_whitespace();
        let first = fields.next();
        let second = fields.next();
        if first == Some(id) || second == Some(id) {
            cursor.rewind_to(mark);
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn finds_matching_zaid_line() {
        let text = "1001.80c 0.99 1 2\n1002.80c 0.50 1 2\n";
        let mut cursor = LineCursor::new(text);
        seek(&mut cursor, "1002.80c", 0, &PathBuf::from("test.ace")).unwrap();
        assert_eq!(cursor.next_line(), Some("1002.80c 0.50 1 2"));
    }

    #[test]
    fn finds_matching_szax_second_field() {
        let text = "2.0.0 1027058.710nc 0.99\nother line\n";
        let mut cursor = LineCursor::new(text);
        seek(&mut cursor, "1027058.710nc", 0, &PathBuf::from("test.ace")).unwrap();
        assert_eq!(cursor.next_line(), Some("2.0.0 1027058.710nc 0.99"));
    }

    #[test]
    fn empty_identifier_is_noop() {
        let text = "first line\nsecond line\n";
        let mut cursor = LineCursor::new(text);
        seek(&mut cursor, "", 0, &PathBuf::from("test.ace")).unwrap();
        assert_eq!(cursor.next_line(), Some("first line"));
    }

    #[test]
    fn missing_identifier_errors_at_eof() {
        let text = "1001.80c 0.99\n";
        let mut cursor = LineCursor::new(text);
        let err = seek(&mut cursor, "9999.80c", 0, &PathBuf::from("test.ace")).unwrap_err();
        assert!(matches!(err, AceError::NuclideNotFound { .. }));
    }

    #[test]
    fn start_line_hint_skips_unconditionally() {
        let text = "skip me\n1002.80c 0.50\n";
        let mut cursor = LineCursor::new(text);
        seek(&mut cursor, "", 2, &PathBuf::from("test.ace")).unwrap();
        assert_eq!(cursor.next_line(), Some("1002.80c 0.50"));
    }
}
