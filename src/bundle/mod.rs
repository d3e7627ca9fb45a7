//! Bundler module
//!
//! Flattens the project's search-order subdirectories into one output
//! directory for distribution. The output is recreated from scratch on
//! every run; within a run, entries copied from later subdirectories
//! replace same-named entries from earlier ones.

mod copy;

use crate::logger;
use crate::project::{ProjectRoot, SEARCH_ORDER};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of one bundle run
#[derive(Debug)]
pub struct BundleReport {
    pub out_dir: PathBuf,
    /// Top-level entries copied, summed across subdirectories
    pub entries: usize,
}

/// Output directory for a bundle run: the operator's override, or
/// `build-<project-basename>` in the current working directory.
pub fn output_dir(project: &ProjectRoot, out_override: Option<&Path>) -> PathBuf {
    out_override.map_or_else(
        || PathBuf::from(format!("build-{}", project.basename())),
        Path::to_path_buf,
    )
}

/// Bundle the project into a flattened output directory.
///
/// Any pre-existing output directory is deleted first; there is no
/// incremental merge across runs. Missing subdirectories are skipped with
/// a warning. Any copy failure aborts the run and propagates.
pub fn run(project: &ProjectRoot, out_override: Option<&Path>) -> io::Result<BundleReport> {
    let out_dir = output_dir(project, out_override);
    logger::log_build_start(project.path(), &out_dir);

    if out_dir.exists() {
        fs::remove_dir_all(&out_dir)?;
    }
    fs::create_dir_all(&out_dir)?;

    let mut found = 0;
    let mut entries = 0;
    for sub in SEARCH_ORDER {
        let dir = project.subdir(sub);
        if !dir.is_dir() {
            logger::log_warning(&format!(
                "Subdirectory '{sub}' not found under '{}', skipping",
                project.path().display()
            ));
            continue;
        }
        found += 1;
        let copied = copy::copy_flattened(&dir, &out_dir)?;
        logger::log_build_subdir(sub, copied);
        entries += copied;
    }

    if found == 0 {
        logger::log_warning("No source subdirectories found; build output is empty");
    }

    logger::log_build_done(&out_dir, entries);
    Ok(BundleReport { out_dir, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_with(files: &[(&str, &str)]) -> (TempDir, ProjectRoot) {
        let dir = TempDir::new().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let project = ProjectRoot::open(dir.path()).unwrap();
        (dir, project)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn default_output_name_derives_from_basename() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("mysite");
        fs::create_dir(&nested).unwrap();
        let project = ProjectRoot::open(&nested).unwrap();
        assert_eq!(output_dir(&project, None), PathBuf::from("build-mysite"));
    }

    #[test]
    fn override_wins_over_derived_name() {
        let (_dir, project) = project_with(&[("public/index.html", "x")]);
        let out = Path::new("dist");
        assert_eq!(output_dir(&project, Some(out)), PathBuf::from("dist"));
    }

    #[test]
    fn single_subdirectory_copies_flat() {
        let (_dir, project) = project_with(&[("public/index.html", "<h1>Hi</h1>")]);
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("out");

        let report = run(&project, Some(&out)).unwrap();

        assert_eq!(report.entries, 1);
        assert_eq!(read(&out.join("index.html")), "<h1>Hi</h1>");
        // Nothing else made it into the output
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn later_subdirectory_overwrites_earlier_file() {
        let (_dir, project) = project_with(&[
            ("includes/app.js", "from includes"),
            ("src/app.js", "from src"),
        ]);
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("out");

        run(&project, Some(&out)).unwrap();

        assert_eq!(read(&out.join("app.js")), "from src");
    }

    #[test]
    fn later_subdirectory_replaces_earlier_directory() {
        let (_dir, project) = project_with(&[
            ("includes/assets/old.css", "old"),
            ("src/assets/new.css", "new"),
        ]);
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("out");

        run(&project, Some(&out)).unwrap();

        assert!(!out.join("assets/old.css").exists());
        assert_eq!(read(&out.join("assets/new.css")), "new");
    }

    #[test]
    fn nested_directories_copy_recursively() {
        let (_dir, project) = project_with(&[("public/js/pages/main.js", "nested")]);
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("out");

        run(&project, Some(&out)).unwrap();

        assert_eq!(read(&out.join("js/pages/main.js")), "nested");
    }

    #[test]
    fn stale_output_is_deleted_before_copying() {
        let (_dir, project) = project_with(&[("public/index.html", "fresh")]);
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.txt"), "leftover").unwrap();

        run(&project, Some(&out)).unwrap();

        assert!(!out.join("stale.txt").exists());
        assert_eq!(read(&out.join("index.html")), "fresh");
    }

    #[test]
    fn empty_project_still_succeeds() {
        let dir = TempDir::new().unwrap();
        let project = ProjectRoot::open(dir.path()).unwrap();
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("out");

        let report = run(&project, Some(&out)).unwrap();

        assert_eq!(report.entries, 0);
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let (_dir, project) = project_with(&[
            ("includes/lib.js", "lib"),
            ("public/index.html", "<h1>Hi</h1>"),
            ("src/app.js", "app"),
        ]);
        let out_root = TempDir::new().unwrap();
        let out = out_root.path().join("out");

        let first = run(&project, Some(&out)).unwrap();
        let mut first_names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        first_names.sort();

        let second = run(&project, Some(&out)).unwrap();
        let mut second_names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        second_names.sort();

        assert_eq!(first.entries, second.entries);
        assert_eq!(first_names, second_names);
        assert_eq!(read(&out.join("index.html")), "<h1>Hi</h1>");
    }
}
