//! Text-layer cleanup applied before any parsing.

/// Normalize raw extracted text into the ordered line sequence the
/// record parser walks.
///
/// Each line is trimmed, horizontal tabs and U+2002 (en space, which the
/// publication uses as column padding) are removed, and lines left empty
/// are dropped. Page order and in-page order are preserved.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

fn clean_line(line: &str) -> String {
    line.trim().replace('\t', "").replace('\u{2002}', "")
}

/// Clean a locality cell: normalize whitespace and strip a single leading
/// footnote marker. Markers anywhere else in the name pass through.
pub fn clean_name(name: &str) -> String {
    let cleaned = clean_line(name);
    match cleaned.strip_prefix('*') {
        Some(rest) => rest.trim().to_string(),
        None => cleaned,
    }
}
