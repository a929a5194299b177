use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use unopposed_races::*;

use crate::args::Args;
use crate::corpus::config_reader::*;
use crate::corpus::io_snapshot::*;
use crate::corpus::manifest::*;

pub mod config_reader;
pub mod io_common;
pub mod io_snapshot;
pub mod manifest;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum UnopposedError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the JSON content of {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing to JSON"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Error writing file {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error listing the directory {path}"))]
    ListingDirectory {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The data directory {path} does not exist"))]
    MissingDataDirectory { path: String },
    #[snafu(display("No data directory was provided (use --data-dir or the configuration file)"))]
    NoDataDirectory {},
    #[snafu(display("Unknown state code: {code}"))]
    UnknownState { code: String },
    #[snafu(display("--states only applies to the summary, not to the manifest or the checks"))]
    StatesWithoutSummary {},
    #[snafu(display("{count} integrity violation(s) found"))]
    IntegrityViolations { count: usize },
    #[snafu(display(
        "Difference detected between the generated manifest and the reference manifest"
    ))]
    ReferenceMismatch {},
}

pub type UnopposedResult<T> = Result<T, UnopposedError>;

/// The options of a run, once the configuration file and the command line are merged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub out: Option<String>,
    pub reference: Option<String>,
    pub years: Vec<u32>,
    pub states: Vec<String>,
    pub excluded_files: Vec<String>,
    pub check: bool,
}

pub fn resolve_settings(args: &Args) -> UnopposedResult<Settings> {
    let (config, config_root) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            info!("config: {:?}", config);
            let root = Path::new(config_path)
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default();
            (config, root)
        }
        None => (CorpusConfig::default(), PathBuf::new()),
    };

    // Paths in the configuration file are relative to the file itself.
    let data_dir: PathBuf = match (&args.data_dir, &config.data_directory) {
        (Some(d), _) => PathBuf::from(d),
        (None, Some(d)) => config_root.join(d),
        (None, None) => return NoDataDirectorySnafu {}.fail(),
    };
    ensure!(
        data_dir.is_dir(),
        MissingDataDirectorySnafu {
            path: data_dir.display().to_string()
        }
    );

    let out = match (&args.out, &config.output_path) {
        (Some(o), _) => Some(o.clone()),
        (None, Some(o)) if o == STDOUT => Some(o.clone()),
        (None, Some(o)) => Some(config_root.join(o).display().to_string()),
        (None, None) => None,
    };

    let years = match args.year {
        Some(y) => vec![y],
        None => config.years.clone(),
    };

    let mut states: Vec<String> = Vec::new();
    for code in args.states.clone().unwrap_or_default() {
        let code = code.trim().to_uppercase();
        ensure!(
            unopposed_races::states::state_name(&code).is_some(),
            UnknownStateSnafu { code }
        );
        states.push(code);
    }
    let writes_manifest = out.is_some() || args.reference.is_some();
    ensure!(
        states.is_empty() || !(writes_manifest || args.check),
        StatesWithoutSummarySnafu {}
    );

    Ok(Settings {
        data_dir,
        out,
        reference: args.reference.clone(),
        years,
        states,
        excluded_files: config.excluded_files,
        check: args.check,
    })
}

pub fn run(args: &Args) -> UnopposedResult<()> {
    let settings = resolve_settings(args)?;
    debug!("settings: {:?}", settings);

    let writes_manifest = settings.out.is_some() || settings.reference.is_some();

    if !writes_manifest && !settings.check {
        let year = settings.years.first().cloned().unwrap_or_else(default_year);
        let selection = load_selection(
            &settings.data_dir,
            year,
            &settings.states,
            &settings.excluded_files,
        )?;
        let summary = summarize(selection.values());
        info!(
            "{}: {} unopposed candidates out of {} races",
            year, summary.total_unopposed, summary.total_races
        );
        let mut by_year: BTreeMap<String, Summary> = BTreeMap::new();
        by_year.insert(year.to_string(), summary);
        write_json(&by_year, STDOUT)?;
        return Ok(());
    }

    let snapshots = list_snapshots(&settings.data_dir)?;
    let filter = CorpusFilter {
        years: settings.years.clone(),
        excluded_files: settings.excluded_files.clone(),
    };
    let corpus = load_corpus(&snapshots, &filter);

    if writes_manifest {
        let manifest = generate_manifest(corpus.iter().map(|(sf, sd)| (sf.year, sd)));
        if let Some(out) = &settings.out {
            write_json(&manifest, out)?;
            info!("Manifest written to {}, years: {:?}", out, manifest.years);
        }
        if let Some(reference) = &settings.reference {
            check_reference(&manifest, reference)?;
        }
    }

    if settings.check {
        let violations =
            validate_corpus(corpus.iter().map(|(sf, sd)| (sf.name.as_str(), sd)));
        for v in violations.iter() {
            println!("{}", v);
        }
        ensure!(
            violations.is_empty(),
            IntegrityViolationsSnafu {
                count: violations.len()
            }
        );
        info!("All {} snapshots passed the checks", corpus.len());
    }

    Ok(())
}

fn default_year() -> u32 {
    chrono::Utc::now().year() as u32
}
