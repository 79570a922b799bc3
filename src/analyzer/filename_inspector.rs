//! File name checks

use std::path::Path;

/// True if any character of `name` is an uppercase letter.
pub fn has_uppercase(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
}

/// Final component of `path`, lossily converted to UTF-8.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
