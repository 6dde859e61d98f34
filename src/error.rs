use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse exclude patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to walk template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// A `template.json` that could not be read or parsed.
    #[error("Cannot load template descriptor '{path}': {reason}.")]
    DescriptorError { path: String, reason: String },

    #[error("Failed to parse configuration file '{path}': {reason}.")]
    ConfigError { path: String, reason: String },

    #[error("Wizard '{name}' not found.")]
    WizardNotFound { name: String },

    #[error("No template matches '{query}'.")]
    TemplateNotFound { query: String },

    #[error("Cannot proceed: no template given. Use --template with an id or name from `list`.")]
    NoTemplateSelected,

    #[error("Cannot proceed: no item name given and template '{template}' has no default name.")]
    MissingItemName { template: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    /// Escape hatch for wizard implementations living outside this crate.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with our Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
