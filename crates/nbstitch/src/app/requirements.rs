//! Dependency consolidation across requirements files.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::info;

use crate::domain::errors::AssemblyError;
use crate::domain::model::Cell;
use crate::infra::config::Config;
use crate::infra::fs;

/// Read every requirements file and merge its entries into one sorted,
/// deduplicated token set.
///
/// Each line yields one token after trimming; blank lines are dropped. The
/// lexicographic order makes the install cell reproducible across runs.
pub fn merge_tokens(paths: &[PathBuf]) -> Result<BTreeSet<String>, AssemblyError> {
    let mut tokens = BTreeSet::new();
    for path in paths {
        let contents = fs::read_text(path)?;
        for line in contents.lines() {
            let token = line.trim();
            if !token.is_empty() {
                tokens.insert(token.to_owned());
            }
        }
        info!(path = %path.display(), "merged requirements file");
    }
    Ok(tokens)
}

/// Build the leading install cell from consolidated tokens.
pub fn install_cell(tokens: &BTreeSet<String>, config: &Config) -> Cell {
    let directive = config.assembly.install_directive();
    let joined = tokens.iter().cloned().collect::<Vec<_>>().join(" ");
    let text = if joined.is_empty() {
        directive
    } else {
        format!("{directive} {joined}")
    };
    info!(requirements = tokens.len(), "built install cell");
    Cell::install(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[test]
    fn duplicate_tokens_across_files_collapse_to_one() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("r1.txt");
        let second = dir.path().join("r2.txt");
        stdfs::write(&first, "numpy\npillow\n").unwrap();
        stdfs::write(&second, "numpy\nrequests\n").unwrap();

        let tokens = merge_tokens(&[first, second]).unwrap();
        assert_eq!(
            tokens.iter().collect::<Vec<_>>(),
            vec!["numpy", "pillow", "requests"]
        );
    }

    #[test]
    fn blank_lines_and_surrounding_whitespace_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.txt");
        stdfs::write(&path, "  numpy \n\n\t\ntorch==2.1.0\r\n").unwrap();

        let tokens = merge_tokens(&[path]).unwrap();
        assert_eq!(tokens.iter().collect::<Vec<_>>(), vec!["numpy", "torch==2.1.0"]);
    }

    #[test]
    fn install_cell_joins_tokens_with_single_spaces() {
        let mut tokens = BTreeSet::new();
        tokens.insert("numpy".to_owned());
        tokens.insert("pillow".to_owned());

        let cell = install_cell(&tokens, &Config::default());
        insta::assert_snapshot!(cell.text, @"!pip install numpy pillow");
    }

    #[test]
    fn missing_requirements_file_aborts_consolidation() {
        let err = merge_tokens(&[PathBuf::from("/nope/r.txt")]).unwrap_err();
        assert!(matches!(err, AssemblyError::Io { .. }));
    }
}
