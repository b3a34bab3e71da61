//! Filesystem helpers that preserve line terminators.

use std::fs;
use std::path::Path;

use crate::domain::errors::AssemblyError;

/// Read a file to a string, attaching the path to any failure.
pub fn read_text(path: &Path) -> Result<String, AssemblyError> {
    fs::read_to_string(path).map_err(|source| AssemblyError::io(path, source))
}

/// Split text into lines keeping each line's original terminator.
///
/// `\r\n` stays attached to its line, so a trim on the slice still exposes
/// the trailing content. Joining the slices reproduces the input verbatim.
pub fn split_keep_terminators(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}
