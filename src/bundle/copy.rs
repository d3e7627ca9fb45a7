//! Copy primitives for the bundler
//!
//! Flattened top-level copy with replace-before-copy semantics, plus the
//! recursive directory copy underneath it.

use std::fs;
use std::io;
use std::path::Path;

/// Copy every entry inside `src` directly into the top level of `dest`.
///
/// Returns the number of top-level entries copied. An entry already
/// present in `dest` (from an earlier subdirectory) is removed first.
pub fn copy_flattened(src: &Path, dest: &Path) -> io::Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        replace_entry(&entry.path(), &target)?;
        count += 1;
    }
    Ok(count)
}

/// Copy `src` to `dest`, removing whatever already sits at `dest`.
fn replace_entry(src: &Path, dest: &Path) -> io::Result<()> {
    if dest.exists() {
        if dest.is_dir() {
            fs::remove_dir_all(dest)?;
        } else {
            fs::remove_file(dest)?;
        }
    }

    if src.is_dir() {
        copy_dir_recursive(src, dest)
    } else {
        // fs::copy preserves permission bits
        fs::copy(src, dest).map(|_| ())
    }
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn replace_removes_file_blocking_a_directory() {
        let root = TempDir::new().unwrap();
        let src = root.path().join("src");
        fs::create_dir_all(src.join("assets")).unwrap();
        fs::write(src.join("assets/a.css"), "a").unwrap();

        let dest = root.path().join("dest");
        fs::create_dir_all(&dest).unwrap();
        // A plain file where a directory is about to land
        fs::write(dest.join("assets"), "not a dir").unwrap();

        copy_flattened(&src, &dest).unwrap();

        assert!(dest.join("assets").is_dir());
        assert_eq!(fs::read_to_string(dest.join("assets/a.css")).unwrap(), "a");
    }

    #[test]
    fn missing_source_propagates_error() {
        let root = TempDir::new().unwrap();
        let dest = root.path().join("dest");
        fs::create_dir_all(&dest).unwrap();
        assert!(copy_flattened(&root.path().join("nope"), &dest).is_err());
    }
}
