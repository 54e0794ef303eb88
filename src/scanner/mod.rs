use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix of the merged exports; nothing else is touched.
pub const MERGED_SUFFIX: &str = ".merged.txt";

#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
}

pub fn enumerate_candidates(folder: &Path) -> Result<Vec<CandidateFile>> {
    if !folder.exists() {
        return Err(ConvertError::FolderNotFound(folder.display().to_string()));
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // top level only, no recursion
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if file_name.ends_with(MERGED_SUFFIX) {
            candidates.push(CandidateFile {
                path: path.to_path_buf(),
                file_name,
            });
        }
    }

    // Directory order is arbitrary, sort for a stable run order
    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(candidates)
}
