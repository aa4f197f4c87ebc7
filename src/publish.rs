//! Output tree writing.
//!
//! Owns every write under the output root: creating the directory skeleton,
//! writing rendered pages, and mirroring the static-asset directory. Write
//! failures (permissions, disk full) are fatal and bubble up to the caller.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Blog index
//! ├── blog/<slug>.html           # One page per blog entry
//! ├── portfolio/index.html       # Portfolio index
//! ├── tag/<tag>.html             # One page per distinct tag
//! └── static/**                  # Mirror of the project's static dir
//! ```
//!
//! The static copy is a mirror, not a merge: any previous `dist/static` is
//! removed wholesale before copying, so files deleted from the source
//! disappear from the output too.

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Idempotently create the output root and its page subdirectories.
pub fn ensure_output_dirs(output: &Path) -> io::Result<()> {
    for dir in ["blog", "portfolio", "tag"] {
        fs::create_dir_all(output.join(dir))?;
    }
    Ok(())
}

/// Write one rendered page. `relative` is the page path under the output
/// root, e.g. `blog/hi.html`.
pub fn write_page(output: &Path, relative: &str, html: &str) -> io::Result<()> {
    fs::write(output.join(relative), html)
}

/// Mirror the static-asset directory into `<output>/static`.
///
/// Returns the number of files copied, or `None` when the project has no
/// static directory (nothing is written, and an existing `dist/static` is
/// left alone — there is no source to mirror).
pub fn mirror_static(static_dir: &Path, output: &Path) -> io::Result<Option<usize>> {
    if !static_dir.is_dir() {
        return Ok(None);
    }

    let dest = output.join("static");
    if dest.exists() {
        fs::remove_dir_all(&dest)?;
    }

    let mut copied = 0;
    for entry in WalkDir::new(static_dir) {
        let entry = entry.map_err(io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(static_dir)
            .map_err(io::Error::other)?;
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(Some(copied))
}
