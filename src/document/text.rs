//! Text utilities for position resolution.
//!
//! LSP columns are counted in UTF-16 code units, so truncation walks the line
//! char by char rather than slicing at a byte offset.

/// Return line `line` of `text`, splitting on `'\n'`.
///
/// Returns None if the line is out of bounds. A trailing newline yields a
/// final empty line, as an editor would show it.
pub fn line_at(text: &str, line: u32) -> Option<&str> {
    text.split('\n').nth(line as usize)
}

/// Number of lines `line_at` can address in `text`.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Keep the first `character` UTF-16 code units of `line`.
///
/// A column past the end of the line yields the whole line. A column that
/// falls inside a surrogate pair stops before that char.
pub fn truncate_to_character(line: &str, character: u32) -> &str {
    let mut utf16_col = 0u32;
    for (i, c) in line.char_indices() {
        utf16_col += c.len_utf16() as u32;
        if utf16_col > character {
            return &line[..i];
        }
    }
    line
}
