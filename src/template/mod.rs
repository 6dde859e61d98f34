//! Templates and the tree they are organized in
//!
//! - `descriptor`: the `template.json` model
//! - `item`: a loaded template and its run routine
//! - `category`: the category tree
//! - `settings`: what a run is given
//! - `processor`: plans the operations of a run
//! - `operation`: the planned operations
//! - `executor`: applies them to the filesystem

pub mod category;
pub mod descriptor;
pub mod executor;
pub mod item;
pub mod operation;
pub mod processor;
pub mod settings;

pub use category::ProjectItemTemplateCategory;
pub use descriptor::{TemplateDescriptor, TemplateElement};
pub use item::ProjectItemTemplate;
pub use operation::TemplateOperation;
pub use settings::{OverwriteMode, RunOptions, RunSettings};
