use std::fmt::Write;

use crate::template::ProjectItemTemplateCategory;

const INDENT: &str = "  ";

/// Renders the template tree, one line per category or template.
///
/// ```text
/// Rust/
///   [1] Rust module - An empty module
///   Tests/
///     [2]* Integration test
/// ```
///
/// Template lines show the id accepted by `new --template`; `*` marks the
/// selected template.
pub fn render_tree(root: &ProjectItemTemplateCategory) -> String {
    let mut out = String::new();
    render_category(root, 0, &mut out);
    out
}

fn render_category(category: &ProjectItemTemplateCategory, depth: usize, out: &mut String) {
    for template in category.items() {
        let marker = if template.selected() { "*" } else { "" };
        let _ = write!(out, "{}[{}]{} {}", INDENT.repeat(depth), template.id(), marker, template.name());
        if let Some(description) = template.description() {
            let _ = write!(out, " - {description}");
        }
        out.push('\n');
    }
    for child in category.categories() {
        let _ = writeln!(out, "{}{}/", INDENT.repeat(depth), child.name());
        render_category(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{ProjectItemTemplate, TemplateDescriptor};

    fn template(name: &str, description: Option<&str>) -> ProjectItemTemplate {
        let descriptor: TemplateDescriptor = serde_json::from_value(serde_json::json!({
            "name": name,
            "description": description,
        }))
        .unwrap();
        ProjectItemTemplate::from_descriptor(format!("/t/{name}/template.json"), descriptor)
    }

    #[test]
    fn renders_nested_categories() {
        let mut root = ProjectItemTemplateCategory::new();
        root.find_category_by_path("Rust").add_item(template("Module", Some("A module")));
        let mut test = template("Test", None);
        test.set_selected(true);
        root.find_category_by_path("Rust/Tests").add_item(test);
        root.assign_category_ids(1);
        root.assign_items_ids(1);

        assert_eq!(
            render_tree(&root),
            "Rust/\n  [1] Module - A module\n  Tests/\n    [2]* Test\n"
        );
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(render_tree(&ProjectItemTemplateCategory::new()), "");
    }
}
