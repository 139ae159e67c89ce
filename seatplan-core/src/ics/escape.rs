//! TEXT value escaping (RFC 5545 §3.3.11).

/// Escape a free-text value for SUMMARY, DESCRIPTION or LOCATION.
///
/// Backslash, semicolon, comma and newline are escaped; everything else is
/// passed through untouched. Escaping the backslash first keeps the other
/// substitutions from being escaped twice.
pub fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Reverse [`escape_text`].
///
/// Unknown escape sequences and a trailing lone backslash are kept as-is.
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some('\\') => result.push('\\'),
            Some(';') => result.push(';'),
            Some(',') => result.push(','),
            Some('n') | Some('N') => result.push('\n'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
