// Reading the state snapshots from a directory.

use std::fs;

use serde_json::Value as JSValue;

use crate::corpus::{
    io_common::{simplify_file_name, snapshot_year, MANIFEST_FILE_NAME},
    *,
};

/// A snapshot file found in the data directory.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SnapshotFile {
    pub path: PathBuf,
    pub name: String,
    pub year: u32,
}

/// Restricts the snapshots that are loaded.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CorpusFilter {
    /// Empty means all the years.
    pub years: Vec<u32>,
    pub excluded_files: Vec<String>,
}

impl CorpusFilter {
    fn accepts(&self, sf: &SnapshotFile) -> bool {
        (self.years.is_empty() || self.years.contains(&sf.year))
            && !self.excluded_files.contains(&sf.name)
    }
}

/// Lists the snapshot files of a directory, sorted by name.
///
/// The manifest and the files that do not follow the `<state>_<year>.json` pattern are ignored.
pub fn list_snapshots(dir: &Path) -> UnopposedResult<Vec<SnapshotFile>> {
    let dir_s = dir.display().to_string();
    let mut res: Vec<SnapshotFile> = Vec::new();
    for entry in fs::read_dir(dir).context(ListingDirectorySnafu { path: dir_s.clone() })? {
        let path = entry
            .context(ListingDirectorySnafu { path: dir_s.clone() })?
            .path();
        let name = match simplify_file_name(&path) {
            Some(n) if n != MANIFEST_FILE_NAME => n,
            _ => continue,
        };
        match snapshot_year(&name) {
            Some(year) => res.push(SnapshotFile { path, name, year }),
            None => debug!("list_snapshots: skipping {:?}", name),
        }
    }
    res.sort_by(|a, b| a.name.cmp(&b.name));
    info!("Found {} snapshots in {}", res.len(), dir_s);
    Ok(res)
}

/// Reads a snapshot. Returns `None` if the scraper flagged the snapshot as erroneous.
pub fn read_snapshot(path: &Path) -> UnopposedResult<Option<ElectionData>> {
    let path_s = path.display().to_string();
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu {
        path: path_s.clone(),
    })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {
        path: path_s.clone(),
    })?;
    if js.get("error").is_some() {
        debug!("read_snapshot: {}: error payload: {:?}", path_s, js.get("message"));
        return Ok(None);
    }
    let ed: ElectionData = serde_json::from_value(js).context(ParsingJsonSnafu { path: path_s })?;
    Ok(Some(ed))
}

/// Loads a snapshot. Any failure is logged and the state is considered as absent.
pub fn load_snapshot(path: &Path) -> StateData {
    match read_snapshot(path) {
        Ok(x) => {
            if x.is_none() {
                warn!("{}: snapshot flagged as erroneous, skipping", path.display());
            }
            StateData::from(x)
        }
        Err(e) => {
            warn!("{}: could not load snapshot: {}", path.display(), e);
            StateData::Absent
        }
    }
}

/// Loads all the snapshots accepted by the filter, next to the file they come from.
pub fn load_corpus(
    snapshots: &[SnapshotFile],
    filter: &CorpusFilter,
) -> Vec<(SnapshotFile, StateData)> {
    snapshots
        .iter()
        .filter(|sf| filter.accepts(sf))
        .map(|sf| (sf.clone(), load_snapshot(&sf.path)))
        .collect()
}

/// Loads the snapshots of the given states for a year, keyed by state code.
///
/// All the states are loaded if the list is empty. States without a snapshot, or whose
/// snapshot is excluded, are absent.
pub fn load_selection(
    dir: &Path,
    year: u32,
    state_codes: &[String],
    excluded_files: &[String],
) -> UnopposedResult<BTreeMap<String, StateData>> {
    let codes: Vec<String> = if state_codes.is_empty() {
        states::state_codes().map(|c| c.to_string()).collect()
    } else {
        state_codes.to_vec()
    };
    let mut res: BTreeMap<String, StateData> = BTreeMap::new();
    for code in codes {
        let file_name = states::snapshot_filename(&code, year)
            .context(UnknownStateSnafu { code: code.clone() })?;
        let path = dir.join(&file_name);
        let sd = if excluded_files.contains(&file_name) {
            debug!("load_selection: {}: {} is excluded", code, file_name);
            StateData::Absent
        } else if path.is_file() {
            load_snapshot(&path)
        } else {
            debug!("load_selection: {}: no snapshot {}", code, file_name);
            StateData::Absent
        };
        res.insert(code, sd);
    }
    Ok(res)
}
