use std::fs::{create_dir_all, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File extension of generated sources.
pub const SOURCE_EXTENSION: &str = "go";

/// Where generated sources go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// A single table written to an explicit path.
    File(PathBuf),
    /// Every table written as `<dir>/<table>.go`.
    Directory(PathBuf),
}

impl OutputTarget {
    pub fn for_run(target: Option<PathBuf>, single_table: bool) -> Self {
        match target {
            None => OutputTarget::Stdout,
            Some(path) if single_table => OutputTarget::File(path),
            Some(path) => OutputTarget::Directory(path),
        }
    }

    /// Path a table's source is written to, `None` for stdout.
    pub fn path_for(&self, table: &str) -> Option<PathBuf> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.clone()),
            OutputTarget::Directory(dir) => {
                Some(dir.join(format!("{table}.{SOURCE_EXTENSION}")))
            }
        }
    }
}

/// Write `data` to `path` through a temp file and rename, syncing the parent
/// directory before and after the rename.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = parent_dir(path);
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    Ok(())
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid output path: {}", path.display()),
        )
    })?;
    Ok(path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy())))
}
