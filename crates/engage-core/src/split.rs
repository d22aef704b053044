//! Line tokenizers shared by the roster and export parsers

/// Split a line on a single separator character, preserving empty fields.
///
/// Two separators in a row yield an empty field; a leading or trailing
/// separator yields a leading or trailing empty field. The result rejoined
/// with the same separator reproduces the input exactly.
pub fn split_on(s: &str, sep: char) -> Vec<String> {
    s.split(sep).map(str::to_string).collect()
}

/// Split a line on runs of whitespace, discarding empty fields.
pub fn split_whitespace_fields(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
