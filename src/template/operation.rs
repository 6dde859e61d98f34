use std::path::PathBuf;

/// A single filesystem step of a template run.
#[derive(Debug, PartialEq)]
pub enum TemplateOperation {
    /// Copy `source` byte-for-byte.
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    /// Write substituted content read from `source`.
    Write { source: PathBuf, target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
    /// `source` matched an exclude pattern.
    Ignore { source: PathBuf },
}

impl TemplateOperation {
    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target, .. } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::Write { source, target, .. } => {
                format!("instantiate '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            TemplateOperation::Ignore { source } => {
                format!("ignore '{}'", source.display())
            }
        }
    }

    /// Gets a message describing the operation and its outcome.
    ///
    /// # Arguments
    /// * `applied` - Whether the operation was carried out (false when an existing
    ///   target was kept)
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, applied: bool, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                match (*target_exists, applied) {
                    (true, true) => format!(
                        "{}Copying '{}' to '{}' (overwriting existing file)",
                        prefix,
                        source.display(),
                        target.display()
                    ),
                    (true, false) => format!(
                        "{}Keeping existing '{}' (not copied from '{}')",
                        prefix,
                        target.display(),
                        source.display()
                    ),
                    _ => format!(
                        "{}Copying '{}' to '{}'",
                        prefix,
                        source.display(),
                        target.display()
                    ),
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                match (*target_exists, applied) {
                    (true, true) => format!(
                        "{}Writing '{}' (overwriting existing file)",
                        prefix,
                        target.display()
                    ),
                    (true, false) => {
                        format!("{}Keeping existing '{}'", prefix, target.display())
                    }
                    _ => format!("{}Writing '{}'", prefix, target.display()),
                }
            }

            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!("{}Directory '{}' already exists", prefix, target.display())
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            TemplateOperation::Ignore { source } => {
                format!("{}Ignoring '{}' (excluded)", prefix, source.display())
            }
        }
    }
}
