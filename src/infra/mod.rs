//! File I/O for outline documents

mod fs;

pub use fs::{DEFAULT_EXTENSIONS, FsError, decode_outline, read_outline, scan_outline_directory};
