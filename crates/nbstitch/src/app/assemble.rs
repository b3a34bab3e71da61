//! Pipeline orchestration: validate, consolidate, build cells, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::{error, info};

use crate::app::{cells, requirements, validate};
use crate::domain::errors::AssemblyError;
use crate::domain::model::{AssemblyReport, AssemblyRequest};
use crate::infra::config::Config;
use crate::infra::notebook::Notebook;

/// Run the whole assembly pipeline for one request.
///
/// Phases run strictly in sequence and the first failure is terminal: the
/// writer is only reached after every cell has been built, so no partial
/// notebook is ever produced.
pub fn assemble(
    request: &AssemblyRequest,
    config: &Config,
) -> Result<AssemblyReport, AssemblyError> {
    info!(output = %request.output.display(), "starting notebook assembly");

    run_pipeline(request, config).inspect_err(|err| {
        error!(error = %err, "notebook assembly aborted");
    })
}

fn run_pipeline(
    request: &AssemblyRequest,
    config: &Config,
) -> Result<AssemblyReport, AssemblyError> {
    validate::validate_inputs(request, config)?;

    let tokens = requirements::merge_tokens(&request.requirements)?;
    let mut all_cells = vec![requirements::install_cell(&tokens, config)];
    all_cells.extend(cells::build_cells(&request.sources, config)?);

    let notebook = Notebook::from_cells(&all_cells);
    notebook.write(&request.output)?;

    info!(
        output = %request.output.display(),
        cells = all_cells.len(),
        "notebook written"
    );

    Ok(AssemblyReport {
        output: request.output.clone(),
        cell_count: all_cells.len(),
        requirement_count: tokens.len(),
    })
}

/// Insert a `_YYYYmmdd_HHMMSS` stamp before the output extension, so
/// repeated runs keep earlier notebooks around.
pub fn timestamped_output(path: &Path) -> Result<PathBuf> {
    let format = format_description!("[year][month][day]_[hour][minute][second]");
    let stamp = OffsetDateTime::now_utc()
        .format(&format)
        .context("failed to format output timestamp")?;

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let name = match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) => format!("{stem}_{stamp}.{extension}"),
        None => format!("{stem}_{stamp}"),
    };
    Ok(path.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_lands_before_the_extension() {
        let stamped = timestamped_output(Path::new("notebooks/out.ipynb")).unwrap();
        let name = stamped.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("out_"));
        assert!(name.ends_with(".ipynb"));
        // out_YYYYmmdd_HHMMSS.ipynb
        assert_eq!(name.len(), "out_00000000_000000.ipynb".len());
        assert_eq!(stamped.parent(), Some(Path::new("notebooks")));
    }
}
