//! Configuration management for filetemplates
//!
//! - `loader`: locating and parsing the settings file

pub mod loader;

pub use loader::Settings;
