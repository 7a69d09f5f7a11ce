//! Filesystem helpers shared by the record store and the checkpoint
//!
//! Artifacts are created owner-only (`0o600`) and their directories
//! `0o750` on unix. Other platforms use the process defaults.

use std::fs::{DirBuilder, File, OpenOptions};
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Permission bits for created files
pub const FILE_MODE: u32 = 0o600;

/// Permission bits for created directories
pub const DIR_MODE: u32 = 0o750;

/// Creates every missing parent directory of `path`
pub fn create_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            let mut builder = DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            builder.mode(DIR_MODE);
            builder.create(parent)
        }
        _ => Ok(()),
    }
}

/// Opens `path` for writing, creating it with [`FILE_MODE`]
///
/// `append` selects between appending and truncating.
pub fn open_for_write(path: &Path, append: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    #[cfg(unix)]
    options.mode(FILE_MODE);
    options.open(path)
}
