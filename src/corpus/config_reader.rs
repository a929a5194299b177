use crate::corpus::*;

use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(rename = "dataDirectory")]
    pub data_directory: Option<String>,
    /// Where to write the manifest, or `stdout`.
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    /// Restricts the corpus to these years. All the years are used if empty.
    #[serde(default)]
    pub years: Vec<u32>,
    /// Snapshot file names that should never be loaded.
    #[serde(rename = "excludedFiles", default)]
    pub excluded_files: Vec<String>,
}

pub fn read_config(path: &str) -> UnopposedResult<CorpusConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: CorpusConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(config)
}
