//! Locating files on disk: RESOLVE sources for the search-path loader and non-native artifacts for external
//! imports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::LoadError;

/// Finds the non-native artifacts (Java, C, ...) that realize an external import.
pub trait ExternalFileLocator {
    /// Every file whose stem is `name` and whose extension is one of `extensions`.
    fn locate(&self, name: &str, extensions: &[String]) -> Result<Vec<PathBuf>, LoadError>;
}

/// Searches a workspace directory tree.
#[derive(Debug, Clone)]
pub struct WorkspaceFileLocator {
    root: PathBuf,
}

impl WorkspaceFileLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ExternalFileLocator for WorkspaceFileLocator {
    fn locate(&self, name: &str, extensions: &[String]) -> Result<Vec<PathBuf>, LoadError> {
        find_files(&self.root, name, extensions).map_err(|source| LoadError::Io {
            path: self.root.clone(),
            source,
        })
    }
}

/// Recursively collect files under `root` named `<stem>.<ext>` for any of `extensions`.
///
/// Directory entries are visited in name order, so the result is stable across runs. A missing `root` yields no
/// matches rather than an error.
pub(crate) fn find_files<S: AsRef<str>>(root: &Path, stem: &str, extensions: &[S]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if !root.is_dir() {
        return Ok(found);
    }

    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir)?.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|e| e.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                subdirs.push(path);
            } else if matches_name(&path, stem, extensions) {
                found.push(path);
            }
        }
        // Reverse so the stack pops subdirectories in name order.
        pending.extend(subdirs.into_iter().rev());
    }
    Ok(found)
}

fn matches_name<S: AsRef<str>>(path: &Path, stem: &str, extensions: &[S]) -> bool {
    let stem_matches = path.file_stem().and_then(|s| s.to_str()) == Some(stem);
    let ext = path.extension().and_then(|e| e.to_str());
    stem_matches && ext.is_some_and(|ext| extensions.iter().any(|e| e.as_ref() == ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    fn unique_temp_dir() -> PathBuf {
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let pid = std::process::id();
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("resolvec_files_test_{}_{pid}_{id}", ts))
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_finds_nested_matches_in_name_order() {
        let tmp = unique_temp_dir();
        touch(&tmp.join("b/Std_Io.java"));
        touch(&tmp.join("a/deep/Std_Io.c"));
        touch(&tmp.join("a/Std_Io.txt"));
        touch(&tmp.join("Other.java"));

        let found = find_files(&tmp, "Std_Io", &["java", "c", "h"]).unwrap();
        assert_eq!(found, vec![tmp.join("a/deep/Std_Io.c"), tmp.join("b/Std_Io.java")]);

        fs::remove_dir_all(&tmp).unwrap();
    }

    #[test]
    fn test_missing_root_is_empty() {
        let tmp = unique_temp_dir();
        assert!(find_files(&tmp, "Anything", &["co"]).unwrap().is_empty());
    }

    #[test]
    fn test_workspace_locator() {
        let tmp = unique_temp_dir();
        touch(&tmp.join("ext/Std_Char_Str_Realiz.java"));

        let locator = WorkspaceFileLocator::new(&tmp);
        let exts = vec!["java".to_string()];
        assert_eq!(
            locator.locate("Std_Char_Str_Realiz", &exts).unwrap(),
            vec![tmp.join("ext/Std_Char_Str_Realiz.java")]
        );
        assert!(locator.locate("Missing", &exts).unwrap().is_empty());

        fs::remove_dir_all(&tmp).unwrap();
    }
}
