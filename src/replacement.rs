//! Literal token substitution.

use crate::constants::tokens;
use crate::naming::{safe_name, strip_extension};

/// A literal `pattern` to be replaced by `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringReplacement {
    pub pattern: String,
    pub value: String,
}

impl StringReplacement {
    pub fn new(pattern: impl Into<String>, value: impl Into<String>) -> Self {
        Self { pattern: pattern.into(), value: value.into() }
    }
}

/// An ordered list of replacements applied in a single left-to-right pass.
///
/// At every position the entries are tried in list order and the first pattern that
/// matches there wins. Replaced text is never scanned again, so an entry mapping
/// `\$itemname$` to `$itemname$` keeps the token literal even though a later entry
/// replaces `$itemname$` itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementList {
    entries: Vec<StringReplacement>,
}

impl ReplacementList {
    pub fn new(entries: Vec<StringReplacement>) -> Self {
        Self { entries }
    }

    /// Builds the six substitutions used when instantiating an item named
    /// `input_name`: the three escapes first, then the three tokens.
    pub fn for_item(input_name: &str) -> Self {
        let name = strip_extension(input_name);
        let escaped = |token: &str| format!("{}{}", tokens::ESCAPE, token);

        Self::new(vec![
            StringReplacement::new(escaped(tokens::FILE_INPUT_NAME), tokens::FILE_INPUT_NAME),
            StringReplacement::new(escaped(tokens::ITEM_NAME), tokens::ITEM_NAME),
            StringReplacement::new(escaped(tokens::SAFE_ITEM_NAME), tokens::SAFE_ITEM_NAME),
            StringReplacement::new(tokens::FILE_INPUT_NAME, input_name),
            StringReplacement::new(tokens::ITEM_NAME, name.as_str()),
            StringReplacement::new(tokens::SAFE_ITEM_NAME, safe_name(&name)),
        ])
    }

    pub fn entries(&self) -> &[StringReplacement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the first entry whose pattern is exactly `pattern`.
    pub fn value_of(&self, pattern: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.pattern == pattern).map(|e| e.value.as_str())
    }

    pub fn apply(&self, text: &str) -> String {
        if !self.entries.iter().any(|e| !e.pattern.is_empty() && text.contains(&e.pattern)) {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        'scan: while let Some(ch) = rest.chars().next() {
            for entry in &self.entries {
                if !entry.pattern.is_empty() && rest.starts_with(entry.pattern.as_str()) {
                    out.push_str(&entry.value);
                    rest = &rest[entry.pattern.len()..];
                    continue 'scan;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }
}
