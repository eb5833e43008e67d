//! Character-level CSV scanner for spreadsheet exports.
//!
//! Handles the dialect published sheets produce: comma delimiters,
//! double-quoted fields with `""` escapes, and LF / CR / CRLF terminators.
//! There is no schema knowledge here and no validation; malformed input is
//! scanned as-is.

/// One tokenized line of cells. Rows may differ in length.
pub type Row = Vec<String>;

/// Scan `text` into rows of cells.
///
/// A `"` always toggles quote mode (even mid-cell), except that `""` inside
/// quotes is a literal quote. Blank lines produce no row.
pub fn tokenize(text: &str) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut row: Row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
            }
            '\n' | '\r' if !in_quotes => {
                if !cell.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => cell.push(ch),
        }
    }

    // No trailing newline
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(v: &[&[&str]]) -> Vec<Row> {
        v.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn simple_grid() {
        assert_eq!(
            tokenize("a,b,c\n1,2,3"),
            rows(&[&["a", "b", "c"], &["1", "2", "3"]])
        );
    }

    #[test]
    fn quoted_comma_stays_in_cell() {
        assert_eq!(tokenize("a,\"b,c\",d"), rows(&[&["a", "b,c", "d"]]));
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(
            tokenize("\"he said \"\"hi\"\"\""),
            rows(&[&["he said \"hi\""]])
        );
    }

    #[test]
    fn crlf_is_one_terminator() {
        assert_eq!(tokenize("a,b\r\nc,d"), rows(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn lone_cr_terminates_row() {
        assert_eq!(tokenize("a\rb"), rows(&[&["a"], &["b"]]));
    }

    #[test]
    fn trailing_newline_adds_no_row() {
        assert_eq!(tokenize("a,b\n"), rows(&[&["a", "b"]]));
        assert_eq!(tokenize("a,b\r\n"), rows(&[&["a", "b"]]));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(tokenize("a\n\n\r\n\nb\n"), rows(&[&["a"], &["b"]]));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\r\n").is_empty());
    }

    #[test]
    fn newline_inside_quotes_is_kept() {
        assert_eq!(
            tokenize("note,\"line one\nline two\"\nx,y"),
            rows(&[&["note", "line one\nline two"], &["x", "y"]])
        );
    }

    #[test]
    fn ragged_rows_are_not_normalized() {
        assert_eq!(
            tokenize("a,b,c\n1\n1,2,3,4"),
            rows(&[&["a", "b", "c"], &["1"], &["1", "2", "3", "4"]])
        );
    }

    #[test]
    fn empty_cells_are_preserved() {
        assert_eq!(tokenize(",a,,\n"), rows(&[&["", "a", "", ""]]));
    }

    #[test]
    fn line_of_only_commas_is_a_row() {
        // The row already holds cells when the newline arrives.
        assert_eq!(tokenize(",,\nx"), rows(&[&["", "", ""], &["x"]]));
    }

    #[test]
    fn bare_quote_toggles_mode() {
        // The quote mid-cell opens a span, so the comma is swallowed.
        assert_eq!(tokenize("ab\"c,d\"e,f"), rows(&[&["abc,de", "f"]]));
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        assert_eq!(tokenize("a,\"b\nc"), rows(&[&["a", "b\nc"]]));
    }

    #[test]
    fn quoted_empty_cell_at_line_end() {
        // `""` outside quotes opens and closes a span: an empty cell.
        assert_eq!(tokenize("a,\"\"\nb"), rows(&[&["a", ""], &["b"]]));
    }

    #[test]
    fn multibyte_text_passes_through() {
        assert_eq!(
            tokenize("Día,Café ☕\n"),
            rows(&[&["Día", "Café ☕"]])
        );
    }
}
