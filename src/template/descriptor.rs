//! The `template.json` model.

use serde::Deserialize;

/// Parsed contents of a template descriptor.
///
/// Only `name` is required. Keys the crate does not know about are ignored so
/// descriptors written for richer front ends still load.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub name: String,
    /// Slash-separated category path, e.g. `Rust/Modules`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Item name offered when the user does not type one.
    #[serde(default)]
    pub default_name: Option<String>,
    #[serde(default)]
    pub wizard_name: Option<String>,
    #[serde(default)]
    pub elements: Vec<TemplateElement>,
    /// Globs, relative to the template folder, left out of a whole-folder run.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// One file produced by a template.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
    /// Source file, relative to the template folder.
    pub template_file: String,
    /// Target path relative to the destination; tokens are substituted.
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default = "get_default_replace_parameters")]
    pub replace_parameters: bool,
}

impl TemplateElement {
    /// Target path pattern, falling back to the source path.
    pub fn target_pattern(&self) -> &str {
        self.file_name.as_deref().filter(|s| !s.is_empty()).unwrap_or(&self.template_file)
    }
}

fn get_default_replace_parameters() -> bool {
    true
}
