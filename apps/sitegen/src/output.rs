//! Build-directory layout and file writes.

use crate::{RenderError, ASSETS};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where a page lands inside the build directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageLocation {
    segments: Vec<String>,
}

impl PageLocation {
    /// Map a page URL path to its location. `/` is the root page; `/a/b`
    /// becomes `a/b/index.html`. Paths that try to leave the build directory
    /// or that start with a shared asset name are rejected.
    pub fn from_page_path(index: usize, path: &str) -> Result<Self, RenderError> {
        let mut segments = Vec::new();
        for segment in path.trim().split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(unsafe_path(index, path)),
                s if s.contains('\\') || s.contains('\0') || s.contains(':') => {
                    return Err(unsafe_path(index, path))
                }
                s if segments.is_empty() && is_asset_name(s) => {
                    return Err(unsafe_path(index, path))
                }
                s => segments.push(s.to_string()),
            }
        }
        Ok(Self { segments })
    }

    pub fn relative_file(&self) -> PathBuf {
        let mut file: PathBuf = self.segments.iter().collect();
        file.push("index.html");
        file
    }

    /// Prefix leading from the page file back to the build root
    pub fn asset_prefix(&self) -> String {
        "../".repeat(self.segments.len())
    }
}

fn is_asset_name(segment: &str) -> bool {
    ASSETS.iter().any(|(name, _)| name.eq_ignore_ascii_case(segment))
}

fn unsafe_path(index: usize, path: &str) -> RenderError {
    RenderError::UnsafePagePath {
        index,
        path: path.to_string(),
    }
}

/// Replace `path` with `contents` in one rename, so readers never observe a
/// partially written file.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

pub(crate) fn create_dir(path: &Path, stage: &'static str) -> Result<(), RenderError> {
    fs::create_dir_all(path).map_err(|source| RenderError::Io {
        stage,
        path: path.to_path_buf(),
        source,
    })
}

/// Files under `root`, relative and `/`-separated, sorted
pub(crate) fn list_files(root: &Path) -> Result<Vec<String>, RenderError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            let parts: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            files.push(parts.join("/"));
        }
    }
    files.sort();
    Ok(files)
}
