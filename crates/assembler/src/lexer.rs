//! Tokenizer for instruction lines.

/// Split a line into opcode and operand tokens.
///
/// Comments start with `;` and extend to end of line. Fields are
/// separated by any run of whitespace and commas. Returns an empty Vec for
/// blank and comment-only lines.
pub(crate) fn tokenize_line(line: &str) -> Vec<&str> {
    let line = match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    };

    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
        .collect()
}
