#![allow(dead_code)]

use filetemplates::template::{OverwriteMode, RunOptions};
use filetemplates::ProjectItemTemplateManager;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The templates shipped with the crate.
pub fn bundled_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn expected_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("expected").join(name)
}

/// Writes `descriptor` as `<root>/<folder>/template.json` along with `files`.
pub fn write_template(root: &Path, folder: &str, descriptor: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("template.json"), descriptor).unwrap();
    for (name, content) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

/// A manager over the bundled templates only, already loaded.
pub fn bundled_manager() -> ProjectItemTemplateManager {
    let mut manager = ProjectItemTemplateManager::new()
        .with_run_options(RunOptions { dry_run: false, overwrite: OverwriteMode::Overwrite });
    manager.register_templates_folder(bundled_dir());
    manager.load_templates();
    manager
}

/// Relative paths of every file below `dir`.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1: std::collections::HashSet<PathBuf> = list_files(dir1).into_iter().collect();
    let files2: std::collections::HashSet<PathBuf> = list_files(dir2).into_iter().collect();

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let content2 = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", content1);
            println!("  --- Expected content:\n{}", content2);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Runs the bundled template named `template_name` for `input_name` into a scratch
/// directory and asserts the output matches `tests/expected/<expected>`.
pub fn run_and_assert(template_name: &str, input_name: &str, expected: &str) {
    let manager = bundled_manager();
    let template = manager
        .find_template_by_name(template_name)
        .unwrap_or_else(|| panic!("bundled template '{template_name}' not found"));

    let tmp_dir = tempfile::tempdir().unwrap();
    manager.run_template(tmp_dir.path(), template, input_name).unwrap();

    let expected_dir = expected_dir(expected);
    match dir_diff::is_different(tmp_dir.path(), &expected_dir) {
        Ok(true) => {
            print_dir_diff(tmp_dir.path(), &expected_dir);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare directories");
        }
    }
}
