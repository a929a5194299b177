use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

pub fn simplify_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// The year of a snapshot file: `new_york_2026.json` -> 2026.
///
/// Files that do not end with an underscore followed by four digits are not snapshots.
pub fn snapshot_year(file_name: &str) -> Option<u32> {
    let stem = file_name.strip_suffix(".json")?;
    let (_, year) = stem.rsplit_once('_')?;
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        year.parse::<u32>().ok()
    } else {
        None
    }
}
