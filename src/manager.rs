//! Template discovery and the run pipeline.

use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::constants::TEMPLATE_DESCRIPTOR;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::replacement::ReplacementList;
use crate::template::{ProjectItemTemplate, ProjectItemTemplateCategory, RunOptions, RunSettings};
use crate::wizard::{Wizard, WizardRegistry};

/// Owns the template folders, the wizard registry and the current category tree.
///
/// The tree is rebuilt from scratch by [`load_templates`](Self::load_templates).
/// Template ids, and the generation counter it returns, are only valid until the
/// next reload.
#[derive(Debug, Default)]
pub struct ProjectItemTemplateManager {
    root: ProjectItemTemplateCategory,
    template_folders: Vec<PathBuf>,
    wizards: WizardRegistry,
    selected_template_path: Option<PathBuf>,
    workspace_root: Option<PathBuf>,
    run_options: RunOptions,
    generation: u64,
}

impl ProjectItemTemplateManager {
    /// Creates a manager with no folders registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bundled_folder` first, then every configured user folder in order.
    pub fn from_settings<P: Into<PathBuf>>(
        bundled_folder: P,
        settings: &Settings,
        workspace_root: Option<PathBuf>,
    ) -> Self {
        let mut manager = Self { workspace_root, ..Self::default() };
        manager.register_templates_folder(bundled_folder);
        for folder in settings.user_folders() {
            manager.register_templates_folder(folder);
        }
        manager
    }

    /// Folder relative template folders are resolved against.
    pub fn with_workspace_root<P: Into<PathBuf>>(mut self, workspace_root: P) -> Self {
        self.workspace_root = Some(workspace_root.into());
        self
    }

    pub fn with_run_options(mut self, run_options: RunOptions) -> Self {
        self.run_options = run_options;
        self
    }

    pub fn set_run_options(&mut self, run_options: RunOptions) {
        self.run_options = run_options;
    }

    pub fn register_wizard(&mut self, wizard: Box<dyn Wizard>) {
        debug!("Registering wizard '{}'", wizard.name());
        self.wizards.register(wizard);
    }

    pub fn register_templates_folder<P: Into<PathBuf>>(&mut self, folder: P) {
        self.template_folders.push(folder.into());
    }

    /// Remembers `template` so that the next reload marks it selected.
    pub fn set_selected_template(&mut self, template: &ProjectItemTemplate) {
        self.selected_template_path = Some(template.template_file_path().to_path_buf());
    }

    pub fn template_folders(&self) -> &[PathBuf] {
        &self.template_folders
    }

    pub fn root(&self) -> &ProjectItemTemplateCategory {
        &self.root
    }

    /// Number of completed reloads.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discards the tree and rescans every registered folder in order.
    ///
    /// # Returns
    /// * `u64` - The generation of the new tree
    pub fn load_templates(&mut self) -> u64 {
        self.root = ProjectItemTemplateCategory::new();

        let folders = self.template_folders.clone();
        for folder in &folders {
            match folder.resolve_against(self.workspace_root.as_deref()) {
                Some(folder) => {
                    let mut visited = HashSet::new();
                    self.load_templates_from_folder(&folder, &mut visited);
                }
                None => debug!(
                    "Skipping relative templates folder '{}': no workspace root",
                    folder.display()
                ),
            }
        }

        self.generation += 1;
        info!(
            "Loaded {} template(s) from {} folder(s)",
            self.root.template_count(),
            folders.len()
        );
        self.generation
    }

    /// Scans `source_path` depth-first: subfolders first, then its own descriptor.
    fn load_templates_from_folder(&mut self, source_path: &Path, visited: &mut HashSet<PathBuf>) {
        if !source_path.exists() {
            debug!("Templates folder '{}' does not exist", source_path.display());
            return;
        }

        match source_path.canonicalize() {
            Ok(real_path) => {
                if !visited.insert(real_path) {
                    warn!("Skipping '{}': already scanned", source_path.display());
                    return;
                }
            }
            Err(e) => {
                debug!("Cannot resolve '{}': {e}", source_path.display());
                return;
            }
        }

        match std::fs::read_dir(source_path) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let item_path = entry.path();
                    if item_path.is_dir() {
                        self.load_templates_from_folder(&item_path, visited);
                    }
                }
            }
            Err(e) => debug!("Cannot list '{}': {e}", source_path.display()),
        }

        let template_file_path = source_path.join(TEMPLATE_DESCRIPTOR);
        if template_file_path.is_file() {
            match ProjectItemTemplate::load_from_file(&template_file_path) {
                Ok(mut template) => {
                    let selected = self.selected_template_path.as_deref()
                        == Some(template.template_file_path());
                    template.set_selected(selected);
                    self.add_template(template);
                }
                Err(e) => debug!("Skipping template: {e}"),
            }
        }

        self.root.assign_category_ids(1);
        self.root.assign_items_ids(1);
    }

    /// Files `template` under its category, marking that category selected when
    /// the template is.
    pub fn add_template(&mut self, template: ProjectItemTemplate) {
        let category = self.root.find_category_by_path(template.category());
        if template.selected() {
            category.set_selected(true);
        }
        category.add_item(template);
    }

    pub fn find_template(&self, id: u32) -> Option<&ProjectItemTemplate> {
        self.root.find_template(id)
    }

    /// First template in tree order whose display name is `name`.
    pub fn find_template_by_name(&self, name: &str) -> Option<&ProjectItemTemplate> {
        self.root.templates().find(|template| template.name() == name)
    }

    /// Settings a run into `dest_path` for an item called `input_name` receives.
    pub fn run_settings<P: AsRef<Path>>(&self, dest_path: P, input_name: &str) -> RunSettings {
        RunSettings::new(dest_path, ReplacementList::for_item(input_name), self.run_options)
    }

    /// Instantiates `template` into `dest_path` for an item called `input_name`.
    ///
    /// Templates declaring a wizard are handed to the first wizard registered
    /// under that name; the run fails with [`Error::WizardNotFound`] before any
    /// file is touched when there is none. Errors of the run itself propagate.
    pub fn run_template<P: AsRef<Path>>(
        &self,
        dest_path: P,
        template: &ProjectItemTemplate,
        input_name: &str,
    ) -> Result<()> {
        let settings = self.run_settings(dest_path, input_name);

        match template.wizard_name() {
            Some(wizard_name) => {
                let wizard = self.wizards.get(wizard_name).ok_or_else(|| {
                    debug!("No wizard named '{}' for template '{}'", wizard_name, template.name());
                    Error::WizardNotFound { name: wizard_name.to_string() }
                })?;
                info!("Running wizard '{}' for template '{}'", wizard_name, template.name());
                wizard.run(template, &settings)
            }
            None => {
                info!("Running template '{}'", template.name());
                template.run(&settings)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_descriptor(dir: &Path, json: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(TEMPLATE_DESCRIPTOR), json).unwrap();
    }

    #[test]
    fn from_settings_puts_bundled_folder_first() {
        let settings = Settings {
            user_templates_folders: vec!["b".to_string(), "".to_string(), "c ".to_string()],
        };
        let manager = ProjectItemTemplateManager::from_settings("bundled", &settings, None);
        assert_eq!(
            manager.template_folders(),
            &[PathBuf::from("bundled"), PathBuf::from("b"), PathBuf::from("c ")]
        );
    }

    #[test]
    fn registering_a_folder_twice_duplicates_templates() {
        let dir = TempDir::new().unwrap();
        write_descriptor(&dir.path().join("one"), r#"{ "name": "One" }"#);

        let mut manager = ProjectItemTemplateManager::new();
        manager.register_templates_folder(dir.path());
        manager.register_templates_folder(dir.path());
        manager.load_templates();
        assert_eq!(manager.root().template_count(), 2);
    }

    #[test]
    fn relative_folder_without_workspace_is_skipped() {
        let mut manager = ProjectItemTemplateManager::new();
        manager.register_templates_folder("definitely/not/absolute");
        manager.load_templates();
        assert!(manager.root().is_empty());
    }

    #[test]
    fn relative_folder_resolves_against_workspace() {
        let workspace = TempDir::new().unwrap();
        write_descriptor(&workspace.path().join("tpl").join("x"), r#"{ "name": "X" }"#);

        let mut manager = ProjectItemTemplateManager::new().with_workspace_root(workspace.path());
        manager.register_templates_folder("tpl");
        manager.load_templates();
        assert!(manager.find_template_by_name("X").is_some());
    }

    #[test]
    fn selected_template_marks_its_category_only() {
        let dir = TempDir::new().unwrap();
        write_descriptor(&dir.path().join("t"), r#"{ "name": "T", "category": "A/B" }"#);

        let mut manager = ProjectItemTemplateManager::new();
        manager.register_templates_folder(dir.path());
        manager.load_templates();
        let template = manager.find_template_by_name("T").unwrap().clone();
        assert!(!template.selected());

        manager.set_selected_template(&template);
        manager.load_templates();

        assert!(manager.find_template_by_name("T").unwrap().selected());
        let a = manager.root().category("A").unwrap();
        assert!(!a.selected());
        assert!(a.category("B").unwrap().selected());
    }

    #[test]
    fn generation_increases_on_every_load() {
        let mut manager = ProjectItemTemplateManager::new();
        assert_eq!(manager.generation(), 0);
        assert_eq!(manager.load_templates(), 1);
        assert_eq!(manager.load_templates(), 2);
        assert_eq!(manager.generation(), 2);
    }
}
