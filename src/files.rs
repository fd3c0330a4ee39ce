// File operations on the navigator's working directory.
//
// Every function takes the directory explicitly instead of reading the
// process-wide current directory. Errors carry the path that failed so the
// diagnostic printed at exit is actionable.

use log::{debug, info};
use std::fmt;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Width of the `=` rule printed above and below file content.
pub const RULE_WIDTH: usize = 50;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to list directory '{}'", .path.display())]
    List { path: PathBuf, source: io::Error },
    #[error("failed to stat '{}'", .path.display())]
    Stat { path: PathBuf, source: io::Error },
    #[error("failed to write file '{}'", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to read file '{}'", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Filename cannot be empty")]
pub struct InvalidFileName;

/// A filename accepted by the create prompt. Only the empty string is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName(String);

impl FileName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidFileName> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidFileName);
        }
        Ok(FileName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One line of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
}

impl fmt::Display for EntryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            EntryKind::Dir => "DIR",
            EntryKind::File => "FILE",
        };
        write!(f, "{} - {} ({} bytes)", self.name, tag, self.size)
    }
}

/// Names and metadata of every entry in `dir`, in the order the file
/// system yields them.
///
/// Metadata follows symlinks, so a dangling link is reported as a `Stat`
/// error rather than skipped. Names that are not valid UTF-8 are decoded
/// lossily and will not reopen under the decoded name.
fn scan(dir: &Path) -> Result<Vec<(String, Metadata)>, FileError> {
    let list_err = |source| FileError::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut scanned = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();
        let meta = fs::metadata(&path).map_err(|source| FileError::Stat { path, source })?;
        scanned.push((entry.file_name().to_string_lossy().into_owned(), meta));
    }
    Ok(scanned)
}

/// List every entry of `dir` with its kind and size.
pub fn list_entries(dir: &Path) -> Result<Vec<EntryInfo>, FileError> {
    let entries: Vec<EntryInfo> = scan(dir)?
        .into_iter()
        .map(|(name, meta)| EntryInfo {
            name,
            kind: if meta.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            },
            size: meta.len(),
        })
        .collect();
    debug!("listed {} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

/// Names of the regular files in `dir`. Directories and other special
/// files are left out. Names are lossy UTF-8, matching what is displayed.
pub fn regular_files(dir: &Path) -> Result<Vec<String>, FileError> {
    Ok(scan(dir)?
        .into_iter()
        .filter(|(_, meta)| meta.is_file())
        .map(|(name, _)| name)
        .collect())
}

/// Create `name` inside `dir`, replacing any existing content.
pub fn write_file(dir: &Path, name: &FileName, content: &str) -> Result<PathBuf, FileError> {
    let path = dir.join(name.as_str());
    fs::write(&path, content).map_err(|source| FileError::Write {
        path: path.clone(),
        source,
    })?;
    info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

/// Read `name` from `dir` as text. Invalid UTF-8 sequences are replaced
/// with U+FFFD.
pub fn read_file(dir: &Path, name: &str) -> Result<String, FileError> {
    let path = dir.join(name);
    let bytes = fs::read(&path).map_err(|source| FileError::Read {
        path: path.clone(),
        source,
    })?;
    info!("read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
