use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path with the conversions the scanner and processor need.
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains
    /// invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use filetemplates::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Resolves a possibly relative path against `base`.
    ///
    /// Absolute paths are returned unchanged. A relative path with no base to
    /// resolve against yields `None`.
    ///
    /// # Examples
    /// ```
    /// use filetemplates::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let base = Path::new("/work");
    /// assert_eq!(
    ///     Path::new("templates").resolve_against(Some(base)),
    ///     Some(PathBuf::from("/work/templates"))
    /// );
    /// assert_eq!(Path::new("templates").resolve_against(None), None);
    /// ```
    fn resolve_against(&self, base: Option<&Path>) -> Option<PathBuf>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn resolve_against(&self, base: Option<&Path>) -> Option<PathBuf> {
        if self.is_absolute() {
            return Some(self.to_path_buf());
        }
        base.map(|base| base.join(self))
    }
}
