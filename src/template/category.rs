//! The category tree templates are displayed in.
//!
//! Categories are purely organizational. Ids are handed out in two pre-order
//! passes, one for categories and one for templates, and are only meaningful
//! until the tree is rebuilt.

use indexmap::IndexMap;

use crate::constants::{CATEGORY_SEPARATOR, UNDEFINED_CATEGORY};

use super::item::ProjectItemTemplate;

#[derive(Debug, Default)]
pub struct ProjectItemTemplateCategory {
    name: String,
    id: u32,
    selected: bool,
    categories: IndexMap<String, ProjectItemTemplateCategory>,
    items: Vec<ProjectItemTemplate>,
}

impl ProjectItemTemplateCategory {
    /// Creates an unnamed root category.
    pub fn new() -> Self {
        Self::default()
    }

    fn named(name: &str) -> Self {
        Self { name: name.to_string(), ..Self::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// True when this category directly holds the selected template.
    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Child categories in order of first creation.
    pub fn categories(&self) -> impl Iterator<Item = &ProjectItemTemplateCategory> {
        self.categories.values()
    }

    pub fn category(&self, name: &str) -> Option<&ProjectItemTemplateCategory> {
        self.categories.get(name)
    }

    /// Templates held directly by this category, in discovery order.
    pub fn items(&self) -> &[ProjectItemTemplate] {
        &self.items
    }

    pub fn add_item(&mut self, template: ProjectItemTemplate) {
        self.items.push(template);
    }

    /// Every template of the subtree, in pre-order.
    pub fn templates(&self) -> Box<dyn Iterator<Item = &ProjectItemTemplate> + '_> {
        Box::new(self.items.iter().chain(self.categories.values().flat_map(|c| c.templates())))
    }

    pub fn template_count(&self) -> usize {
        self.items.len() + self.categories.values().map(|c| c.template_count()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.categories.is_empty()
    }

    pub fn find_or_create_child_category(
        &mut self,
        name: &str,
    ) -> &mut ProjectItemTemplateCategory {
        self.categories.entry(name.to_string()).or_insert_with(|| Self::named(name))
    }

    /// Walks (creating as needed) the `/`-separated `path` below this category.
    ///
    /// An empty path maps to the `Undefined` category.
    pub fn find_category_by_path(&mut self, path: &str) -> &mut ProjectItemTemplateCategory {
        let path = if path.is_empty() { UNDEFINED_CATEGORY } else { path };
        path.split(CATEGORY_SEPARATOR)
            .fold(self, |category, name| category.find_or_create_child_category(name))
    }

    /// Numbers this category and its descendants in pre-order, starting at
    /// `start_id`. Returns the next free id.
    pub fn assign_category_ids(&mut self, start_id: u32) -> u32 {
        self.id = start_id;
        let mut next_id = start_id + 1;
        for child in self.categories.values_mut() {
            next_id = child.assign_category_ids(next_id);
        }
        next_id
    }

    /// Numbers every template of the subtree in pre-order, starting at
    /// `start_id`. Returns the next free id.
    pub fn assign_items_ids(&mut self, start_id: u32) -> u32 {
        let mut next_id = start_id;
        for item in &mut self.items {
            item.set_id(next_id);
            next_id += 1;
        }
        for child in self.categories.values_mut() {
            next_id = child.assign_items_ids(next_id);
        }
        next_id
    }

    pub fn find_template(&self, id: u32) -> Option<&ProjectItemTemplate> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .or_else(|| self.categories.values().find_map(|c| c.find_template(id)))
    }
}
