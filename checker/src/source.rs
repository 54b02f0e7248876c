use anyhow::{bail, Context, Result};
use simcore::{Document, DocumentSource};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reads every file with a given extension under a directory.
///
/// Documents come back sorted by path so repeated runs see the same order.
/// Ids are paths relative to the root, using `/` as separator.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
    recursive: bool,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P, extension: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
            recursive: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
    }

    /// Relative path joined with `/`; a non-UTF-8 component is an error.
    fn document_id(&self, path: &Path) -> Result<String> {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let mut parts = Vec::new();
        for c in rel.components() {
            match c.as_os_str().to_str() {
                Some(part) => parts.push(part),
                None => bail!("file name is not valid UTF-8: {}", path.display()),
            }
        }
        Ok(parts.join("/"))
    }
}

impl DocumentSource for DirectorySource {
    type Error = anyhow::Error;

    fn load(&self) -> Result<Vec<Document>> {
        if !self.root.exists() {
            bail!("directory not found: {}", self.root.display());
        }
        if !self.root.is_dir() {
            bail!("not a directory: {}", self.root.display());
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut docs = Vec::new();
        let walker = WalkDir::new(&self.root).min_depth(1).max_depth(max_depth).sort_by_file_name();
        for entry in walker {
            let entry = entry.with_context(|| format!("failed to list {}", self.root.display()))?;
            let p = entry.path();
            // Follows symlinks, unlike `entry.file_type()`.
            if !p.is_file() || !self.matches(p) {
                continue;
            }
            let id = self.document_id(p)?;
            let text =
                fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))?;
            docs.push(Document::new(id, text));
        }
        tracing::debug!(
            root = %self.root.display(),
            num_docs = docs.len(),
            ext = %self.extension,
            "loaded documents"
        );
        Ok(docs)
    }
}
