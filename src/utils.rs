use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

pub fn parse_export_format(s: &str) -> Result<ExportFormat, String> {
    let normalized = s.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err("export format cannot be empty".to_string());
    }

    match normalized.as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(format!(
            "invalid value '{}' (expected 'csv' or 'json')",
            other
        )),
    }
}

// Derives the release year from the first four characters of a release date
// string. Dates on compilation albums can be partial ("1987", "2003-04") or
// placeholders ("0000"), so a non-numeric prefix yields None instead of an
// error.
pub fn parse_release_year(release_date: &str) -> Option<i32> {
    let prefix: String = release_date.chars().take(4).collect();
    if prefix.chars().count() != 4 || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    prefix.parse::<i32>().ok()
}

// Offsets for paging through a collection of `total` items at `limit` per
// page: 0, limit, 2*limit, ... strictly below total.
pub fn page_offsets(total: u64, limit: u64) -> Vec<u64> {
    if limit == 0 {
        return Vec::new();
    }

    (0..total).step_by(limit as usize).collect()
}

pub fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

// Parses a track-id file: one id per line, blank lines and '#' comments
// ignored.
pub fn parse_id_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.to_string())
        .collect()
}
