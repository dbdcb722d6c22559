//! Reading outline files from disk.

use crate::domain::{Link, TreeNode};
use crate::wiki::{FormatError, WikiParser};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Extensions picked up by a directory scan when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["wiki", "smsn"];

/// Errors during file system operations on outlines.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("outline file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl FsError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::PermissionDenied { path }
            | FsError::Io { path, .. }
            | FsError::InvalidEncoding { path, .. }
            | FsError::Parse { path, .. }
            | FsError::NotADirectory { path } => path,
        }
    }
}

/// Reads and parses an outline file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is not UTF-8 or uses CR-only line endings.
/// Returns `FsError::Parse` if the content is not a valid outline.
pub fn read_outline(path: &Path, parser: &WikiParser<'_>) -> Result<TreeNode<Link>, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    let text = decode_outline(bytes, path)?;
    parser.parse(&text).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Validates the encoding of raw file bytes and returns the text without
/// any UTF-8 byte order mark.
///
/// # Errors
///
/// Returns `FsError::InvalidEncoding` for UTF-16 input, invalid UTF-8, or
/// lone CR line endings.
pub fn decode_outline(bytes: Vec<u8>, path: &Path) -> Result<String, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    let mut content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    if content.starts_with('\u{FEFF}') {
        content.drain(..'\u{FEFF}'.len_utf8());
    }

    // CRLF is fine; `str::lines` strips it. A bare CR would hide line breaks.
    let has_lone_cr = content
        .as_bytes()
        .windows(2)
        .any(|w| w[0] == b'\r' && w[1] != b'\n')
        || content.as_bytes().last() == Some(&b'\r');
    if has_lone_cr {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "CR-only line endings detected (old Mac format); convert to LF or CRLF"
                .into(),
        });
    }

    Ok(content)
}

/// Scans a directory recursively for outline files.
///
/// Skips hidden files and directories (starting with `.`). A file matches
/// when its extension is one of `extensions`, compared case-sensitively.
///
/// Returns paths relative to the input directory, in walk order.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_outline_directory<'a>(
    dir: &Path,
    extensions: &'a [String],
) -> Result<impl Iterator<Item = PathBuf> + 'a, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let dir_owned = dir.to_path_buf();
    let iter = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(move |e| has_extension(e, extensions))
        .filter_map(move |e| e.path().strip_prefix(&dir_owned).ok().map(Path::to_path_buf));

    Ok(iter)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_extension(entry: &DirEntry, extensions: &[String]) -> bool {
    entry
        .path()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x == e))
}
