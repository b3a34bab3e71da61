//! Input validation gate for the assembly pipeline.

use std::path::Path;

use tracing::{error, info};

use crate::domain::errors::AssemblyError;
use crate::domain::model::AssemblyRequest;
use crate::infra::config::Config;
use crate::infra::fs;

/// Check every precondition before any output is produced.
///
/// All-or-nothing: the first failing check aborts the pipeline. The
/// destination extension is checked first so a bad destination is rejected
/// before any file I/O happens.
pub fn validate_inputs(request: &AssemblyRequest, config: &Config) -> Result<(), AssemblyError> {
    info!("validating inputs");

    validate_destination(&request.output, &config.assembly.notebook_extension())?;

    let accepted = config.assembly.accepted_extensions();
    for source in &request.sources {
        validate_source(source, &accepted)?;
    }

    for requirements in &request.requirements {
        validate_requirements(requirements)?;
    }

    Ok(())
}

fn validate_destination(output: &Path, extension: &str) -> Result<(), AssemblyError> {
    let matches = output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if !matches {
        error!(path = %output.display(), "output file must have a .{extension} extension");
        return Err(AssemblyError::InvalidExtension(output.to_path_buf()));
    }
    info!(path = %output.display(), "output path validated");
    Ok(())
}

fn validate_source(source: &Path, accepted: &[String]) -> Result<(), AssemblyError> {
    if !source.is_file() {
        error!(path = %source.display(), "source file not found");
        return Err(AssemblyError::NotFound(source.to_path_buf()));
    }
    if !has_extension(source, accepted) {
        error!(path = %source.display(), "invalid source file extension");
        return Err(AssemblyError::InvalidExtension(source.to_path_buf()));
    }
    info!(path = %source.display(), "source file validated");
    Ok(())
}

fn validate_requirements(requirements: &Path) -> Result<(), AssemblyError> {
    if !requirements.is_file() {
        error!(path = %requirements.display(), "requirements file not found");
        return Err(AssemblyError::NotFound(requirements.to_path_buf()));
    }

    let contents = fs::read_text(requirements)?;
    if contents.trim().is_empty() {
        error!(path = %requirements.display(), "requirements file is empty");
        return Err(AssemblyError::EmptyRequirements(requirements.to_path_buf()));
    }

    info!(path = %requirements.display(), "requirements file validated");
    Ok(())
}

fn has_extension(path: &Path, accepted: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| accepted.iter().any(|candidate| candidate == &ext))
}
