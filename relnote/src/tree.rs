use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::MergeError;

/// A read-only tree of named files, addressed by relative `/`-separated paths.
pub trait FragmentTree {
    /// Every file path in the tree, in no particular order.
    fn paths(&self) -> Result<Vec<String>, MergeError>;

    /// The full contents of the file at `path`.
    fn read(&self, path: &str) -> Result<String, MergeError>;
}

/// A fragment tree rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DirTree {
    root: PathBuf,
}

impl DirTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirTree { root: root.into() }
    }
}

impl FragmentTree for DirTree {
    fn paths(&self) -> Result<Vec<String>, MergeError> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|source| MergeError::Walk {
                root: self.root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path());
            let components: Vec<_> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            paths.push(components.join("/"));
        }
        Ok(paths)
    }

    fn read(&self, path: &str) -> Result<String, MergeError> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|source| MergeError::Io { path: full, source })
    }
}

/// An in-memory fragment tree.
#[derive(Debug, Clone, Default)]
pub struct MemTree {
    files: BTreeMap<String, String>,
}

impl MemTree {
    pub fn new() -> Self {
        MemTree::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MemTree {
            files: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl FragmentTree for MemTree {
    fn paths(&self) -> Result<Vec<String>, MergeError> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, path: &str) -> Result<String, MergeError> {
        self.files.get(path).cloned().ok_or_else(|| MergeError::Io {
            path: PathBuf::from(path),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file in tree"),
        })
    }
}

/// The paths in `tree` ending in `suffix`, sorted by byte value.
///
/// '.' sorts before '/', which sorts before alphanumerics, so a file like
/// "net.md" comes before everything in the directory "net". The merge
/// relies on that order.
pub fn sorted_markdown_filenames(
    tree: &impl FragmentTree,
    suffix: &str,
) -> Result<Vec<String>, MergeError> {
    let mut filenames: Vec<String> = tree
        .paths()?
        .into_iter()
        .filter(|p| p.ends_with(suffix))
        .collect();
    filenames.sort();
    Ok(filenames)
}
