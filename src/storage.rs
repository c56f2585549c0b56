//! File access used by the driver.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Reading and rewriting target files.
pub trait Storage {
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace the contents of `path`. Either the whole new content lands
    /// or an error is returned and the old content is left in place.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The local file system. Writes go through a temporary file in the target's
/// directory which is then renamed over the target. Symlinks are resolved
/// first so the linked file is rewritten and the link stays a link.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Storage for LocalFs {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        // Rename over the link target, not the link.
        let target = fs::canonicalize(path)?;
        let dir = target.parent().unwrap_or_else(|| Path::new("/"));
        let permissions = fs::metadata(&target)?.permissions();

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.as_file().set_permissions(permissions)?;
        temp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }
}
