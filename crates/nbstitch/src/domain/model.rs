//! Domain models for cells, assembly requests, and reports.

use std::path::PathBuf;

/// Role of a cell within the generated notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// The leading cell installing all consolidated requirements.
    Install,
    /// A cell carrying the filtered content of one source file.
    Content,
}

/// One unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub text: String,
}

impl Cell {
    pub fn install(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Install,
            text: text.into(),
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Content,
            text: text.into(),
        }
    }
}

/// Inputs for one assembly invocation.
///
/// `sources` order is preserved in the output: content cells appear in
/// exactly this order after the install cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyRequest {
    pub sources: Vec<PathBuf>,
    pub requirements: Vec<PathBuf>,
    pub output: PathBuf,
}

/// Summary returned after a notebook has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub output: PathBuf,
    pub cell_count: usize,
    pub requirement_count: usize,
}
