use log::debug;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::descriptor::TemplateDescriptor;
use super::executor::OperationExecutor;
use super::operation::TemplateOperation;
use super::processor::ItemProcessor;
use super::settings::RunSettings;

/// A template loaded from its `template.json`.
#[derive(Debug, Clone)]
pub struct ProjectItemTemplate {
    template_file_path: PathBuf,
    descriptor: TemplateDescriptor,
    id: u32,
    selected: bool,
}

impl ProjectItemTemplate {
    /// Reads and parses the descriptor at `path`.
    ///
    /// # Returns
    /// * `Err(Error::DescriptorError)` - if the file cannot be read or is not a valid
    ///   descriptor
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let descriptor_error = |reason: String| Error::DescriptorError {
            path: path.display().to_string(),
            reason,
        };

        let content =
            std::fs::read_to_string(path).map_err(|e| descriptor_error(e.to_string()))?;
        let descriptor: TemplateDescriptor =
            serde_json::from_str(&content).map_err(|e| descriptor_error(e.to_string()))?;

        debug!("Loaded template '{}' from '{}'", descriptor.name, path.display());
        Ok(Self::from_descriptor(path, descriptor))
    }

    pub fn from_descriptor<P: AsRef<Path>>(path: P, descriptor: TemplateDescriptor) -> Self {
        Self {
            template_file_path: path.as_ref().to_path_buf(),
            descriptor,
            id: 0,
            selected: false,
        }
    }

    pub fn template_file_path(&self) -> &Path {
        &self.template_file_path
    }

    /// Folder holding the descriptor and the template's files.
    pub fn template_folder(&self) -> &Path {
        self.template_file_path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Declared category path, empty when none was declared.
    pub fn category(&self) -> &str {
        self.descriptor.category.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> Option<&str> {
        self.descriptor.description.as_deref()
    }

    pub fn default_name(&self) -> Option<&str> {
        self.descriptor.default_name.as_deref().filter(|s| !s.is_empty())
    }

    /// Wizard that takes over the run, if one is declared.
    pub fn wizard_name(&self) -> Option<&str> {
        self.descriptor.wizard_name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Computes the operations a run with `settings` would perform.
    pub fn plan(&self, settings: &RunSettings) -> Result<Vec<TemplateOperation>> {
        let processor = ItemProcessor::new(
            self.template_folder(),
            &settings.dest_path,
            &settings.replacements,
            &self.descriptor.exclude,
        )?;
        processor.plan(&self.descriptor.elements)
    }

    /// Instantiates the template into `settings.dest_path`.
    ///
    /// Nothing is written unless every source file could be planned.
    pub fn run(&self, settings: &RunSettings) -> Result<()> {
        let operations = self.plan(settings)?;
        debug!(
            "Running template '{}' into '{}': {} operation(s)",
            self.name(),
            settings.dest_path.display(),
            operations.len()
        );
        OperationExecutor::new(settings.options).apply_all(&operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replacement::ReplacementList;
    use crate::template::settings::RunOptions;
    use std::fs;
    use tempfile::TempDir;

    fn write_template(dir: &Path, descriptor: &str) -> PathBuf {
        let path = dir.join("template.json");
        fs::write(&path, descriptor).unwrap();
        path
    }

    #[test]
    fn loads_descriptor() {
        let dir = TempDir::new().unwrap();
        let path = write_template(
            dir.path(),
            r#"{ "name": "Class", "category": "C#", "wizardName": "" }"#,
        );
        let template = ProjectItemTemplate::load_from_file(&path).unwrap();
        assert_eq!(template.name(), "Class");
        assert_eq!(template.category(), "C#");
        assert_eq!(template.wizard_name(), None);
        assert_eq!(template.template_file_path(), path.as_path());
        assert_eq!(template.template_folder(), dir.path());
        assert!(!template.selected());
    }

    #[test]
    fn malformed_descriptor_is_a_descriptor_error() {
        let dir = TempDir::new().unwrap();
        let path = write_template(dir.path(), "{ not json");
        let result = ProjectItemTemplate::load_from_file(path);
        assert!(matches!(result, Err(Error::DescriptorError { .. })));
    }

    #[test]
    fn missing_descriptor_is_a_descriptor_error() {
        let dir = TempDir::new().unwrap();
        let result = ProjectItemTemplate::load_from_file(dir.path().join("template.json"));
        assert!(matches!(result, Err(Error::DescriptorError { .. })));
    }

    #[test]
    fn run_instantiates_elements() {
        let template_dir = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(template_dir.path().join("item.txt"), "Hello $itemname$").unwrap();
        let path = write_template(
            template_dir.path(),
            r#"{
                "name": "Text",
                "elements": [{ "templateFile": "item.txt", "fileName": "$fileinputname$" }]
            }"#,
        );
        let template = ProjectItemTemplate::load_from_file(path).unwrap();
        let settings = RunSettings::new(
            dest.path(),
            ReplacementList::for_item("greeting.txt"),
            RunOptions::default(),
        );

        template.run(&settings).unwrap();
        let written = fs::read_to_string(dest.path().join("greeting.txt")).unwrap();
        assert_eq!(written, "Hello greeting");
    }

    #[test]
    fn failed_plan_writes_nothing() {
        let template_dir = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(template_dir.path().join("a.txt"), "a").unwrap();
        let path = write_template(
            template_dir.path(),
            r#"{
                "name": "Broken",
                "elements": [
                    { "templateFile": "a.txt" },
                    { "templateFile": "missing.txt" }
                ]
            }"#,
        );
        let template = ProjectItemTemplate::load_from_file(path).unwrap();
        let settings =
            RunSettings::new(dest.path(), ReplacementList::for_item("x"), RunOptions::default());

        assert!(template.run(&settings).is_err());
        assert!(!dest.path().join("a.txt").exists());
    }
}
