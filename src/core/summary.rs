/// Number of characters kept in a summary.
pub const SUMMARY_CHARS: usize = 256;

/// Appended when the report was cut.
pub const TRUNCATION_MARKER: &str = "...";

/// First `SUMMARY_CHARS` characters of the report, marked if anything was cut.
pub fn summarize(report: &str) -> String {
    match report.char_indices().nth(SUMMARY_CHARS) {
        Some((cut, _)) => format!("{}{}", &report[..cut], TRUNCATION_MARKER),
        None => report.to_string(),
    }
}
