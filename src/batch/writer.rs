use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::domain::{AnswerField, ProductResult};
use crate::error::{LookupError, Result};
use crate::utils::timestamped_filename;

const DEFAULT_PREFIX: &str = "product_lookup_results";
const SEARCH_TERM_COLUMN: &str = "Search Term";

pub fn result_columns() -> Vec<&'static str> {
    std::iter::once(SEARCH_TERM_COLUMN)
        .chain(AnswerField::all().iter().map(|f| f.column()))
        .collect()
}

pub fn default_output_path() -> PathBuf {
    PathBuf::from(timestamped_filename(DEFAULT_PREFIX, "csv", &Local::now()))
}

/// Writes `results` to `path`, or to a timestamped file in the working directory.
/// Returns the path written.
pub fn write_results(results: &[ProductResult], path: Option<&Path>) -> Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_output_path);
    let write_error = |message: String| LookupError::BatchWrite {
        path: path.clone(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| write_error(err.to_string()))?;
    }
    let file = File::create(&path).map_err(|err| write_error(err.to_string()))?;
    write_results_to(file, results).map_err(|err| write_error(err.to_string()))?;

    info!(path = %path.display(), rows = results.len(), "results saved");
    Ok(path)
}

/// The header row is written even when there are no results.
pub fn write_results_to<W: Write>(writer: W, results: &[ProductResult]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(result_columns())?;
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}
