//! Wizards: named handlers that generate a template's output themselves.

use std::fmt;

use crate::error::Result;
use crate::template::{ProjectItemTemplate, RunSettings};

/// A named generator that takes over a template run.
///
/// A wizard receives the full run settings, substitutions included, and is
/// responsible for producing every file.
pub trait Wizard {
    fn name(&self) -> &str;

    fn run(&self, template: &ProjectItemTemplate, settings: &RunSettings) -> Result<()>;
}

/// Registered wizards in registration order.
///
/// Lookup is by exact name and the first registration wins; registering a second
/// wizard under the same name leaves it unreachable.
#[derive(Default)]
pub struct WizardRegistry {
    wizards: Vec<Box<dyn Wizard>>,
}

impl WizardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, wizard: Box<dyn Wizard>) {
        self.wizards.push(wizard);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Wizard> {
        self.wizards.iter().find(|w| w.name() == name).map(|w| w.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.wizards.iter().map(|w| w.name())
    }

    pub fn len(&self) -> usize {
        self.wizards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wizards.is_empty()
    }
}

impl fmt::Debug for WizardRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::replacement::ReplacementList;
    use crate::template::{RunOptions, TemplateDescriptor};

    /// Succeeds or fails on run depending on `.1`.
    struct Named(&'static str, bool);

    impl Wizard for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn run(&self, _: &ProjectItemTemplate, _: &RunSettings) -> Result<()> {
            if self.1 {
                Ok(())
            } else {
                Err(anyhow::anyhow!("wizard {} failed", self.0).into())
            }
        }
    }

    #[test]
    fn first_registration_wins() {
        let mut registry = WizardRegistry::new();
        registry.register(Box::new(Named("class", true)));
        registry.register(Box::new(Named("class", false)));
        assert_eq!(registry.len(), 2);

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["class", "class"]);

        let descriptor: TemplateDescriptor =
            serde_json::from_str(r#"{ "name": "t", "wizardName": "class" }"#).unwrap();
        let template = ProjectItemTemplate::from_descriptor("/t/template.json", descriptor);
        let settings =
            RunSettings::new("/out", ReplacementList::for_item("x"), RunOptions::default());
        assert!(registry.get("class").unwrap().run(&template, &settings).is_ok());
    }

    #[test]
    fn lookup_is_exact() {
        let mut registry = WizardRegistry::new();
        registry.register(Box::new(Named("Class", true)));
        assert!(registry.get("class").is_none());
        assert!(registry.get("Class ").is_none());
        assert!(WizardRegistry::new().is_empty());
    }

    #[test]
    fn debug_lists_names() {
        let mut registry = WizardRegistry::new();
        registry.register(Box::new(Named("a", true)));
        assert_eq!(format!("{registry:?}"), r#"["a"]"#);
    }
}
