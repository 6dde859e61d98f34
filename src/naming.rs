use std::path::Path;

/// Returns `input` without its directory part and its last extension.
///
/// `"MyClass.cs"` becomes `"MyClass"`, `"archive.tar.gz"` becomes `"archive.tar"` and
/// a dotfile such as `".gitignore"` is kept as is.
pub fn strip_extension(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Turns `name` into something usable as an identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_` and a leading digit is prefixed
/// with `_`.
pub fn safe_name(name: &str) -> String {
    let mut safe: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if safe.starts_with(|c: char| c.is_ascii_digit()) {
        safe.insert(0, '_');
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_last_extension_only() {
        assert_eq!(strip_extension("MyClass.cs"), "MyClass");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("Makefile"), "Makefile");
        assert_eq!(strip_extension(".gitignore"), ".gitignore");
        assert_eq!(strip_extension("src/lib.rs"), "lib");
        assert_eq!(strip_extension(""), "");
    }

    #[test]
    fn safe_name_replaces_illegal_characters() {
        assert_eq!(safe_name("my class"), "my_class");
        assert_eq!(safe_name("foo-bar.baz"), "foo_bar_baz");
        assert_eq!(safe_name("Already_Safe1"), "Already_Safe1");
    }

    #[test]
    fn safe_name_prefixes_leading_digit() {
        assert_eq!(safe_name("3d model"), "_3d_model");
    }

    #[test]
    fn safe_name_handles_non_ascii_and_empty() {
        assert_eq!(safe_name("café"), "caf_");
        assert_eq!(safe_name(""), "");
    }
}
