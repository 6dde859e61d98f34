//! Constants used throughout filetemplates

/// Descriptor file that marks a folder as a template
pub const TEMPLATE_DESCRIPTOR: &str = "template.json";

/// Category given to templates that declare none
pub const UNDEFINED_CATEGORY: &str = "Undefined";

/// Separator between category path segments
pub const CATEGORY_SEPARATOR: char = '/';

/// Folder holding the bundled templates, next to the executable
pub const BUNDLED_TEMPLATES_DIR: &str = "templates";

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["filetemplates.json", "filetemplates.yaml", "filetemplates.yml"];

/// Tokens understood by the run pipeline
pub mod tokens {
    pub const FILE_INPUT_NAME: &str = "$fileinputname$";
    pub const ITEM_NAME: &str = "$itemname$";
    pub const SAFE_ITEM_NAME: &str = "$safeitemname$";

    /// Prefix that keeps a token literal in template content
    pub const ESCAPE: &str = "\\";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
