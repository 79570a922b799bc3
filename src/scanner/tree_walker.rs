//! Recursive directory listing with a case-sensitive suffix filter

use std::fmt;
use std::fs;
use std::io;
use std::path::{self, Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// File-name suffix used to select candidate files. Always starts with `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter(String);

impl ExtensionFilter {
    pub fn new(extension: &str) -> Self {
        if extension.starts_with('.') {
            Self(extension.to_string())
        } else {
            Self(format!(".{}", extension))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.0)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WalkError {
    #[error("Directory not found at '{}'", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error while walking '{}': {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Files found by a walk plus every error skipped along the way
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub errors: Vec<WalkError>,
}

impl WalkOutcome {
    fn failed(error: WalkError) -> Self {
        Self {
            files: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Lists the absolute paths of all regular files below `root` whose name
/// ends with `filter`. Symlinked directories are not followed.
///
/// Never fails: a missing or unreadable root yields no files and one error,
/// and errors deeper in the tree are recorded while the walk carries on.
pub fn walk(root: &Path, filter: &ExtensionFilter) -> WalkOutcome {
    let root = match path::absolute(root) {
        Ok(root) => root,
        Err(source) => {
            return WalkOutcome::failed(WalkError::Io {
                path: root.to_path_buf(),
                source,
            })
        }
    };

    match fs::metadata(&root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return WalkOutcome::failed(WalkError::NotADirectory(root)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return WalkOutcome::failed(WalkError::RootNotFound(root))
        }
        Err(source) => return WalkOutcome::failed(WalkError::Io { path: root, source }),
    }

    let mut outcome = WalkOutcome::default();
    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.clone());
                debug!("Skipping unreadable entry {}: {}", path.display(), source);
                outcome.errors.push(WalkError::Traversal { path, source });
                continue;
            }
        };

        if !is_file_entry(&entry) {
            continue;
        }
        if filter.matches(&entry.file_name().to_string_lossy()) {
            outcome.files.push(entry.into_path());
        }
    }

    outcome
}

/// Regular files, symlinks to regular files, and dangling symlinks.
/// Symlinks to directories are neither listed nor descended into.
fn is_file_entry(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        match fs::metadata(entry.path()) {
            Ok(target) => target.is_file(),
            Err(_) => true,
        }
    } else {
        entry.file_type().is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) -> PathBuf {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"x").unwrap();
        path
    }

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn test_extension_filter_normalization() {
        assert_eq!(ExtensionFilter::new("pdf").as_str(), ".pdf");
        assert_eq!(ExtensionFilter::new(".pdf").as_str(), ".pdf");
        assert_eq!(ExtensionFilter::new("pdf"), ExtensionFilter::new(".pdf"));
    }

    #[test]
    fn test_extension_filter_is_case_sensitive() {
        let filter = ExtensionFilter::new(".pdf");
        assert!(filter.matches("report.pdf"));
        assert!(filter.matches("Invoice.pdf"));
        assert!(!filter.matches("REPORT.PDF"));
        assert!(!filter.matches("notpdf"));
        assert!(!filter.matches("report.pdf.bak"));
    }

    #[test]
    fn test_walk_finds_matching_files_recursively() {
        let dir = TempDir::new().unwrap();
        let expected = vec![
            touch(dir.path(), "a.pdf"),
            touch(dir.path(), "sub/b.pdf"),
            touch(dir.path(), "sub/deeper/c.pdf"),
        ];
        touch(dir.path(), "d.PDF");
        touch(dir.path(), "e.txt");
        touch(dir.path(), "sub/notpdf");
        fs::create_dir_all(dir.path().join("folder.pdf")).unwrap();

        let outcome = walk(dir.path(), &ExtensionFilter::new(".pdf"));
        assert!(outcome.errors.is_empty());
        assert_eq!(sorted(outcome.files), sorted(expected));
    }

    #[test]
    fn test_walk_extension_without_dot_is_equivalent() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.pdf");
        touch(dir.path(), "x/b.pdf");
        touch(dir.path(), "x/c.txt");

        let with_dot = walk(dir.path(), &ExtensionFilter::new(".pdf"));
        let without_dot = walk(dir.path(), &ExtensionFilter::new("pdf"));
        assert_eq!(sorted(with_dot.files), sorted(without_dot.files));
    }

    #[test]
    fn test_walk_returns_absolute_paths() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.pdf");

        let outcome = walk(dir.path(), &ExtensionFilter::new("pdf"));
        assert_eq!(outcome.files.len(), 1);
        assert!(outcome.files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_walk_missing_root_reports_error_and_no_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let outcome = walk(&missing, &ExtensionFilter::new(".pdf"));
        assert!(outcome.files.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(outcome.errors[0], WalkError::RootNotFound(_)));
    }

    #[test]
    fn test_walk_root_that_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = touch(dir.path(), "lonely.pdf");

        let outcome = walk(&file, &ExtensionFilter::new(".pdf"));
        assert!(outcome.files.is_empty());
        assert!(matches!(outcome.errors[0], WalkError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_lists_symlinked_files_but_not_symlinked_dirs() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let real = touch(dir.path(), "real.dat");
        touch(dir.path(), "target/inner.pdf");
        let linked = dir.path().join("linked.pdf");
        symlink(&real, &linked).unwrap();
        let dangling = dir.path().join("dangling.pdf");
        symlink(dir.path().join("gone.dat"), &dangling).unwrap();
        symlink(dir.path().join("target"), dir.path().join("dirlink.pdf")).unwrap();

        let outcome = walk(dir.path(), &ExtensionFilter::new(".pdf"));
        assert!(outcome.errors.is_empty());
        assert_eq!(
            sorted(outcome.files),
            sorted(vec![dangling, linked, dir.path().join("target/inner.pdf")])
        );
    }

    #[test]
    fn test_walk_empty_directory() {
        let dir = TempDir::new().unwrap();
        let outcome = walk(dir.path(), &ExtensionFilter::new(".pdf"));
        assert!(outcome.files.is_empty());
        assert!(outcome.errors.is_empty());
    }
}
