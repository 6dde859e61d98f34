use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::constants::TEMPLATE_DESCRIPTOR;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::replacement::ReplacementList;

use super::descriptor::TemplateElement;
use super::operation::TemplateOperation;

/// Plans the operations that instantiate one template into a destination.
pub struct ItemProcessor<'a> {
    template_root: &'a Path,
    dest_root: &'a Path,
    replacements: &'a ReplacementList,
    exclude: GlobSet,
}

impl<'a> ItemProcessor<'a> {
    pub fn new(
        template_root: &'a Path,
        dest_root: &'a Path,
        replacements: &'a ReplacementList,
        exclude_patterns: &[String],
    ) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            debug!("Adding exclude pattern: {pattern} to globset");
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self { template_root, dest_root, replacements, exclude: builder.build()? })
    }

    /// Plans the run: the listed `elements`, or the whole template folder when the
    /// descriptor lists none.
    pub fn plan(&self, elements: &[TemplateElement]) -> Result<Vec<TemplateOperation>> {
        if elements.is_empty() {
            self.plan_folder()
        } else {
            elements.iter().map(|element| self.plan_element(element)).collect()
        }
    }

    fn plan_element(&self, element: &TemplateElement) -> Result<TemplateOperation> {
        if !is_contained_relative(Path::new(&element.template_file)) {
            return Err(Error::ProcessError {
                source_path: element.template_file.clone(),
                e: "template file must stay inside the template folder".to_string(),
            });
        }
        let source = self.template_root.join(&element.template_file);
        if !source.is_file() {
            return Err(Error::ProcessError {
                source_path: source.display().to_string(),
                e: "template file does not exist".to_string(),
            });
        }
        let target = self.render_target(Path::new(element.target_pattern()))?;
        self.process_file(source, target, element.replace_parameters)
    }

    fn plan_folder(&self) -> Result<Vec<TemplateOperation>> {
        let mut operations = Vec::new();
        let mut walker = WalkDir::new(self.template_root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_nested_template(entry));

        while let Some(entry) = walker.next() {
            let entry = entry?;
            let source = entry.path().to_path_buf();
            let relative = source.strip_prefix(self.template_root).map_err(|e| {
                Error::ProcessError { source_path: source.display().to_string(), e: e.to_string() }
            })?;

            if relative == Path::new(TEMPLATE_DESCRIPTOR) {
                continue;
            }

            let is_dir = entry.file_type().is_dir();
            if self.exclude.is_match(relative) {
                if is_dir {
                    walker.skip_current_dir();
                }
                operations.push(TemplateOperation::Ignore { source });
                continue;
            }

            let target = self.render_target(relative)?;
            if is_dir {
                let target_exists = target.exists();
                operations.push(TemplateOperation::CreateDirectory { target, target_exists });
            } else if source.is_dir() {
                debug!("Not following directory symlink '{}'", source.display());
            } else {
                operations.push(self.process_file(source, target, true)?);
            }
        }
        Ok(operations)
    }

    /// Substitutes tokens in a template-relative path and joins it to the destination.
    fn render_target(&self, relative: &Path) -> Result<PathBuf> {
        let pattern = relative.to_str_checked()?;
        let rendered = self.replacements.apply(pattern);

        if !has_valid_rendered_path_parts(pattern, &rendered) {
            return Err(Error::ProcessError {
                source_path: rendered,
                e: "The rendered path is not valid".to_string(),
            });
        }
        Ok(self.dest_root.join(rendered))
    }

    fn process_file(
        &self,
        source: PathBuf,
        target: PathBuf,
        replace_parameters: bool,
    ) -> Result<TemplateOperation> {
        let target_exists = target.exists();
        if replace_parameters {
            match String::from_utf8(fs::read(&source)?) {
                Ok(text) => {
                    let content = self.replacements.apply(&text);
                    return Ok(TemplateOperation::Write {
                        source,
                        target,
                        content,
                        target_exists,
                    });
                }
                Err(_) => debug!("'{}' is not UTF-8, copying as is", source.display()),
            }
        }
        Ok(TemplateOperation::Copy { source, target, target_exists })
    }
}

/// A subfolder carrying its own descriptor belongs to another template.
fn is_nested_template(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.path().join(TEMPLATE_DESCRIPTOR).is_file()
}

/// A relative path that cannot climb out of the folder it is joined to.
fn is_contained_relative(path: &Path) -> bool {
    !path.is_absolute()
        && !path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
}

/// Validates that rendering did not empty out a path component or escape the
/// destination.
///
/// Template path `$itemname$/mod.rs` rendered with an empty item name gives
/// `/mod.rs`, which is rejected.
fn has_valid_rendered_path_parts(template_path: &str, rendered_path: &str) -> bool {
    if rendered_path.is_empty() || !is_contained_relative(Path::new(rendered_path)) {
        return false;
    }

    let is_separator = |c: char| c == '/' || c == std::path::MAIN_SEPARATOR;
    template_path
        .split(is_separator)
        .zip(rendered_path.split(is_separator))
        .all(|(template_part, rendered_part)| {
            template_part.is_empty() || !rendered_part.is_empty()
        })
}
