//! Content line folding (RFC 5545 §3.1).

/// Longest physical line, counted in characters.
pub const MAX_LINE_LENGTH: usize = 75;

const FOLD_SEPARATOR: &str = "\r\n ";

/// Fold a logical line into physical lines of at most 75 characters.
///
/// The first line carries 75 characters; every continuation line starts with
/// a single space followed by up to 74 characters. Characters are never split.
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_LENGTH {
        return line.to_string();
    }

    let chars: Vec<char> = line.chars().collect();
    let (first, rest) = chars.split_at(MAX_LINE_LENGTH);

    let mut chunks = vec![first.iter().collect::<String>()];
    chunks.extend(
        rest.chunks(MAX_LINE_LENGTH - 1)
            .map(|chunk| chunk.iter().collect::<String>()),
    );

    chunks.join(FOLD_SEPARATOR)
}

/// Undo folding by removing every CRLF + space sequence.
pub fn unfold_lines(text: &str) -> String {
    text.replace(FOLD_SEPARATOR, "")
}
