//! Find the PHP files a run should touch.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Extension of files eligible for stripping.
pub const PHP_EXTENSION: &str = "php";

/// Error produced while collecting target files.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// The root path does not exist.
    #[error("`{}` is neither a file nor a directory", path.display())]
    NotFound { path: PathBuf },
    /// A directory below the root could not be listed.
    #[error("failed to walk `{}`: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Collect every `.php` file at or below `root`.
///
/// A file root yields itself if it has the PHP extension and nothing
/// otherwise. Directories are walked depth-first with entries sorted by
/// name at each level, so the result is stable between runs. Hidden
/// entries below the root are skipped and symlinks are followed.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::NotFound {
            path: root.to_path_buf(),
        });
    }

    if root.is_file() {
        return Ok(if is_php(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;
        if entry.file_type().is_file() && is_php(entry.path()) {
            debug!(path = %entry.path().display(), "found target");
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_php(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PHP_EXTENSION)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
