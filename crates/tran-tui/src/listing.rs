//! Received file listing: top-level names and word wrapping.

/// Collapse received paths to their first path segment.
///
/// Both `/` and `\` separate segments, empty and `.` segments are skipped,
/// duplicates are dropped and the first-seen order is kept.
#[must_use]
pub fn top_level_files(files: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for path in files {
        let first = path
            .split(['/', '\\'])
            .find(|segment| !segment.is_empty() && *segment != ".");
        if let Some(name) = first {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
    }
    seen
}

/// Top-level names joined for display.
#[must_use]
pub fn top_level_files_text(files: &[String]) -> String {
    top_level_files(files).join(", ")
}

/// Greedy word wrap at `width` columns.
///
/// Words longer than `width` are kept whole on their own line.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
