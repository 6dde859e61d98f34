use log::{debug, info};
use std::path::Path;

use crate::error::{Error, Result};
use crate::prompt::confirm;

use super::operation::TemplateOperation;
use super::settings::{OverwriteMode, RunOptions};

/// Applies planned operations to the filesystem.
pub struct OperationExecutor {
    options: RunOptions,
}

impl OperationExecutor {
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Applies every operation in order, stopping at the first failure.
    pub fn apply_all(&self, operations: &[TemplateOperation]) -> Result<()> {
        for operation in operations {
            let applied = self.handle_file_operation(operation).map_err(|e| {
                Error::ProcessError { source_path: operation.error_context(), e: e.to_string() }
            })?;
            info!("{}", operation.get_message(applied, self.options.dry_run));
        }
        Ok(())
    }

    /// Handles a single operation; returns whether it was carried out.
    fn handle_file_operation(&self, operation: &TemplateOperation) -> Result<bool> {
        debug!("Handling file operation: {operation:?}");
        match operation {
            TemplateOperation::Write { target, target_exists, content, .. } => {
                let confirmed = self.may_replace(target, *target_exists)?;
                if confirmed {
                    self.write_file(content, target)?;
                }
                Ok(confirmed)
            }
            TemplateOperation::Copy { source, target, target_exists } => {
                let confirmed = self.may_replace(target, *target_exists)?;
                if confirmed {
                    self.copy_file(source, target)?;
                }
                Ok(confirmed)
            }
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if !target_exists {
                    self.create_dir_all(target)?;
                }
                Ok(true)
            }
            TemplateOperation::Ignore { .. } => Ok(true),
        }
    }

    fn may_replace(&self, target: &Path, target_exists: bool) -> Result<bool> {
        if !target_exists {
            return Ok(true);
        }
        match self.options.overwrite {
            OverwriteMode::Skip => Ok(false),
            OverwriteMode::Overwrite => Ok(true),
            // Dry runs never prompt.
            OverwriteMode::Prompt if self.options.dry_run => Ok(false),
            OverwriteMode::Prompt => {
                confirm(format!("Overwrite {}?", target.display()))
            }
        }
    }

    /// Copy a file from source to destination, creating parent directories if needed.
    fn copy_file(&self, source_path: &Path, dest_path: &Path) -> Result<()> {
        if self.options.dry_run {
            return Ok(());
        }
        if let Some(parent) = dest_path.parent() {
            self.create_dir_all(parent)?;
        }
        Ok(std::fs::copy(source_path, dest_path).map(|_| ())?)
    }

    /// Write content to a file, creating parent directories if needed.
    fn write_file(&self, content: &str, dest_path: &Path) -> Result<()> {
        if self.options.dry_run {
            return Ok(());
        }
        if let Some(parent) = dest_path.parent() {
            self.create_dir_all(parent)?;
        }
        std::fs::write(dest_path, content).map_err(Error::from)
    }

    fn create_dir_all(&self, dest_path: &Path) -> Result<()> {
        if self.options.dry_run {
            return Ok(());
        }
        std::fs::create_dir_all(dest_path).map_err(Error::from)
    }
}
