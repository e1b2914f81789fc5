//! Line normalization and the skip filter for non-column declarations.

/// Prefixes of lines that declare indexes, constraints or statements with no
/// struct-relevant content.
const SKIP_PREFIXES: &[&str] = &[
    "key",
    "index",
    "unique",
    "(",
    ")",
    "--",
    "drop",
    "partition",
];

/// Fragments of table-option lines (`) engine=innodb ...`).
const SKIP_FRAGMENTS: &[&str] = &["engine=", "auto_increment=", "charset=", "partition "];

/// Normalizes a raw input line.
///
/// Trims, strips one trailing comma, trims again, removes backticks,
/// lowercases and collapses whitespace runs to a single space. Returns
/// `None` for lines that are empty after trimming.
pub fn normalize(raw: &str) -> Option<String> {
    let line = raw.trim();
    let line = line.strip_suffix(',').unwrap_or(line).trim();
    if line.is_empty() {
        return None;
    }

    let lowered = line.replace('`', "").to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    Some(collapsed)
}

/// Returns true for normalized lines that carry no column information.
pub fn should_skip(line: &str) -> bool {
    SKIP_PREFIXES.iter().any(|p| line.starts_with(p))
        || SKIP_FRAGMENTS.iter().any(|f| line.contains(f))
}
