//! Jupyter notebook (nbformat v4) serialization and output.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::domain::errors::AssemblyError;
use crate::domain::model::Cell;
use crate::infra::fs::split_keep_terminators;

const NBFORMAT: u32 = 4;
const NBFORMAT_MINOR: u32 = 5;

/// A minimal nbformat v4 document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<NotebookCell>,
    pub metadata: Map<String, Value>,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

/// One code cell in the nbformat schema.
///
/// `source` holds the cell text split into lines with their terminators
/// kept, which is how the reference tooling stores multi-line sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotebookCell {
    pub cell_type: String,
    pub id: String,
    pub execution_count: Option<u32>,
    pub metadata: Map<String, Value>,
    pub outputs: Vec<Value>,
    pub source: Vec<String>,
}

impl NotebookCell {
    fn code(id: String, text: &str) -> Self {
        Self {
            cell_type: "code".to_owned(),
            id,
            execution_count: None,
            metadata: Map::new(),
            outputs: Vec::new(),
            source: split_keep_terminators(text).map(str::to_owned).collect(),
        }
    }
}

impl Notebook {
    /// Build a notebook from assembled cells, preserving their order.
    ///
    /// Cell ids are deterministic (`cell-0`, `cell-1`, ...) so repeated runs
    /// over unchanged inputs produce byte-identical output.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let cells = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| NotebookCell::code(format!("cell-{index}"), &cell.text))
            .collect();

        Self {
            cells,
            metadata: Map::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Serialize and persist the notebook at `path`.
    ///
    /// The document is written to a temporary file in the destination
    /// directory and renamed into place, so a reader never observes a
    /// half-written notebook. An existing file is replaced silently.
    pub fn write(&self, path: &Path) -> Result<(), AssemblyError> {
        let rendered = serde_json::to_string_pretty(self)
            .map_err(|err| AssemblyError::io(path, std::io::Error::other(err)))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| AssemblyError::io(parent, source))?;
                parent
            }
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(dir).map_err(|source| AssemblyError::io(dir, source))?;
        fs::write(temp.path(), rendered.as_bytes())
            .map_err(|source| AssemblyError::io(temp.path(), source))?;
        temp.persist(path)
            .map_err(|err| AssemblyError::io(path, err.error))?;

        Ok(())
    }
}
