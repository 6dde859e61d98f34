use std::path::{Path, PathBuf};

use crate::replacement::ReplacementList;

/// What to do when a file the template produces already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteMode {
    /// Leave existing files untouched.
    #[default]
    Skip,
    /// Replace existing files.
    Overwrite,
    /// Ask before replacing each file.
    Prompt,
}

/// Knobs that apply to every run, independent of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Log the planned operations without touching the filesystem.
    pub dry_run: bool,
    pub overwrite: OverwriteMode,
}

/// Destination and substitutions handed to a template or wizard run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub dest_path: PathBuf,
    pub replacements: ReplacementList,
    pub options: RunOptions,
}

impl RunSettings {
    pub fn new<P: AsRef<Path>>(
        dest_path: P,
        replacements: ReplacementList,
        options: RunOptions,
    ) -> Self {
        Self { dest_path: dest_path.as_ref().to_path_buf(), replacements, options }
    }
}
