/// Handles argument parsing and the `list`/`new` commands.
pub mod cli;

/// Settings file handling.
pub mod config;

pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for std types.
pub mod ext;

/// Template discovery and the run pipeline.
pub mod manager;

/// Item name helpers.
pub mod naming;

/// User input and interaction handling.
pub mod prompt;

/// Token substitution.
pub mod replacement;

/// Templates, their category tree and the file operations of a run.
pub mod template;

/// External generators that can take over a run.
pub mod wizard;

pub use error::{Error, Result};
pub use manager::ProjectItemTemplateManager;
