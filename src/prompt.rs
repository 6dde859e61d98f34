//! Interactive prompts.

use crate::error::Result;
use crate::template::ProjectItemTemplate;
use dialoguer::{Confirm, FuzzySelect, Input};

/// Asks a yes/no question, defaulting to no.
pub fn confirm(prompt: String) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Lets the user pick one of `templates`; returns its index.
pub fn select_template(templates: &[&ProjectItemTemplate]) -> Result<usize> {
    let labels: Vec<String> = templates.iter().map(|t| template_label(t)).collect();

    Ok(FuzzySelect::new()
        .with_prompt("Template")
        .items(&labels)
        .default(0)
        .interact()?)
}

/// Asks for the item name, offering `default` when there is one.
pub fn input_item_name(default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt("Name");
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

/// `Category / Name` label used by the picker.
fn template_label(template: &ProjectItemTemplate) -> String {
    match template.category() {
        "" => template.name().to_string(),
        category => format!("{} / {}", category, template.name()),
    }
}
