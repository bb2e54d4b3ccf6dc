//! Disposable on-disk project trees for filesystem-backed tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary project tree: `<root>/Arbeitsbereich` plus whatever the test
/// seeds below it. Everything disappears on drop.
pub struct ProjectFixture {
    root: TempDir,
    workspace: PathBuf,
}

impl ProjectFixture {
    pub fn new() -> Self {
        let root = TempDir::new().expect("temp project root");
        let workspace = root.path().join("Arbeitsbereich");
        fs::create_dir_all(&workspace).expect("workspace folder");
        Self { root, workspace }
    }

    /// The directory above the workspace (where Dokumentation lives).
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// The project's workspace root, as the host would report it.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Create a folder below the workspace, returning its path.
    pub fn mkdir(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.workspace.join(rel.as_ref());
        fs::create_dir_all(&path).expect("fixture folder");
        path
    }

    /// Create an empty file below the workspace, parents included.
    pub fn touch(&self, rel: impl AsRef<Path>) -> PathBuf {
        let path = self.workspace.join(rel.as_ref());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("fixture parent folder");
        }
        fs::write(&path, b"").expect("fixture file");
        path
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
