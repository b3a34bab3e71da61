//! Content filtering and cell construction for source files.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::errors::AssemblyError;
use crate::domain::model::Cell;
use crate::infra::config::Config;
use crate::infra::fs;

/// Build one content cell per source file, preserving input order.
pub fn build_cells(sources: &[PathBuf], config: &Config) -> Result<Vec<Cell>, AssemblyError> {
    let marker = config.assembly.skip_marker();
    let mut cells = Vec::with_capacity(sources.len());
    for source in sources {
        cells.push(build_content_cell(source, &marker)?);
        info!(path = %source.display(), "added content cell");
    }
    Ok(cells)
}

/// Read a source file and drop every line marked for exclusion.
///
/// A line is removed exactly when its whitespace-trimmed text ends with the
/// marker. Kept lines stay verbatim, terminators included, so the cell
/// reproduces the original file minus the marked lines.
pub fn build_content_cell(source: &Path, marker: &str) -> Result<Cell, AssemblyError> {
    let contents = fs::read_text(source)?;
    let filtered: String = fs::split_keep_terminators(&contents)
        .filter(|line| !line.trim().ends_with(marker))
        .collect();
    Ok(Cell::content(filtered))
}
