use std::fs;

use serde::Serialize;
use text_diff::print_diff;

use crate::corpus::*;

/// Writes to the standard output instead of a file.
pub const STDOUT: &str = "stdout";

/// Builds the manifest of a corpus: the available years, most recent first, and the
/// nationwide statistics of each year.
///
/// Each state comes with the year of its snapshot file.
pub fn generate_manifest<'a, I>(states: I) -> Manifest
where
    I: IntoIterator<Item = (u32, &'a StateData)>,
{
    let by_year = build_nationwide_by_year(states);
    let years: Vec<u32> = by_year.iter().map(|(y, _)| *y).collect();
    let nationwide: BTreeMap<String, NationwideStats> = by_year
        .into_iter()
        .map(|(y, stats)| (y.to_string(), stats))
        .collect();
    Manifest {
        years,
        updated_at: chrono::Utc::now().to_rfc3339(),
        nationwide: Some(nationwide),
    }
}

pub fn write_json<T: Serialize>(value: &T, out: &str) -> UnopposedResult<()> {
    let pretty = serde_json::to_string_pretty(value).context(WritingJsonSnafu {})?;
    if out == STDOUT {
        println!("{}", pretty);
    } else {
        fs::write(out, pretty + "\n").context(WritingFileSnafu { path: out })?;
    }
    Ok(())
}

pub fn read_manifest(path: &str) -> UnopposedResult<Manifest> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let manifest: Manifest =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(manifest)
}

// The timestamp is left out of the comparison.
fn comparable_json(manifest: &Manifest) -> UnopposedResult<String> {
    let js = serde_json::json!({
        "years": manifest.years,
        "nationwide": manifest.nationwide,
    });
    serde_json::to_string_pretty(&js).context(WritingJsonSnafu {})
}

/// Compares a generated manifest with a reference manifest, and prints the differences.
pub fn check_reference(manifest: &Manifest, reference_path: &str) -> UnopposedResult<()> {
    let reference = read_manifest(reference_path)?;
    info!("Comparing with the reference manifest {}", reference_path);
    let pretty_reference = comparable_json(&reference)?;
    let pretty_generated = comparable_json(manifest)?;
    if pretty_reference != pretty_generated {
        warn!("Found differences with the reference manifest");
        print_diff(pretty_reference.as_str(), pretty_generated.as_str(), "\n");
        return ReferenceMismatchSnafu {}.fail();
    }
    Ok(())
}
