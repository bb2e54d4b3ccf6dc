//! Conventional layout of a project's working directory.
//!
//! Every project root carries three convention-named subfolders, located by a
//! case-sensitive marker substring and created on first access when absent:
//! CAD data, purchased parts (Kaufteile) and customer parts (Kundenteile).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Marker for the CAD data subfolder.
pub const CAD_MARKER: &str = "CAD";
/// Marker for the purchased-parts subfolder.
pub const KAUFTEILE_MARKER: &str = "Kaufteile";
/// Marker for the customer-parts subfolder.
pub const KUNDENTEILE_MARKER: &str = "Kundenteile";

/// Errors while resolving working-directory subfolders.
#[derive(Debug, thiserror::Error)]
pub enum WorkDirError {
    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A project's working directory and its convention-named subfolders.
///
/// Constructed fresh per save operation from the host's active project path.
/// Resolution is idempotent: a subfolder matched or created once is returned
/// again by every later call.
#[derive(Debug, Clone)]
pub struct WorkingDir {
    root: PathBuf,
}

impl WorkingDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `*CAD*` folder, created as `CAD` when absent.
    pub fn cad(&self) -> Result<PathBuf, WorkDirError> {
        self.resolve(CAD_MARKER)
    }

    /// The `*Kaufteile*` folder for purchased parts, created when absent.
    pub fn kaufteile(&self) -> Result<PathBuf, WorkDirError> {
        self.resolve(KAUFTEILE_MARKER)
    }

    /// The `*Kundenteile*` folder for customer parts, created when absent.
    pub fn kundenteile(&self) -> Result<PathBuf, WorkDirError> {
        self.resolve(KUNDENTEILE_MARKER)
    }

    /// Destination folder for one vendor's purchased parts.
    ///
    /// The path is derived only; the caller creates it once a classification
    /// is accepted.
    pub fn vendor_dir(&self, vendor: &str) -> Result<PathBuf, WorkDirError> {
        Ok(self.kaufteile()?.join(vendor))
    }

    /// Names of the vendor folders below Kaufteile, sorted, for vendor
    /// suggestions in the classification form.
    pub fn vendors(&self) -> Vec<String> {
        let Ok(kaufteile) = self.kaufteile() else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(&kaufteile) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .flatten()
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
            .collect();
        names.sort();
        names
    }

    /// First immediate subdirectory whose name contains `marker`
    /// (case-sensitive), else a freshly created `root/marker`.
    fn resolve(&self, marker: &str) -> Result<PathBuf, WorkDirError> {
        if let Ok(entries) = fs::read_dir(&self.root) {
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }
                if entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.contains(marker))
                {
                    return Ok(path);
                }
            }
        }

        let created = self.root.join(marker);
        fs::create_dir_all(&created).map_err(|source| WorkDirError::Create {
            path: created.clone(),
            source,
        })?;
        debug!(path = %created.display(), "created working subfolder");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn finds_folder_containing_marker() {
        let tmp = TempDir::new().unwrap();
        let existing = tmp.path().join("005_CAD_Daten");
        fs::create_dir(&existing).unwrap();

        let workdir = WorkingDir::new(tmp.path());
        assert_eq!(workdir.cad().unwrap(), existing);
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("cad")).unwrap();

        let workdir = WorkingDir::new(tmp.path());
        // lowercase folder does not match, so a new `CAD` folder appears
        assert_eq!(workdir.cad().unwrap(), tmp.path().join("CAD"));
    }

    #[test]
    fn creates_marker_folder_when_missing() {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());

        let kaufteile = workdir.kaufteile().unwrap();
        assert_eq!(kaufteile, tmp.path().join("Kaufteile"));
        assert!(kaufteile.is_dir());
    }

    #[test]
    fn resolution_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());

        let first = workdir.kundenteile().unwrap();
        let second = workdir.kundenteile().unwrap();
        assert_eq!(first, second);

        let subdirs = fs::read_dir(tmp.path()).unwrap().flatten().count();
        assert_eq!(subdirs, 1, "resolution must not create a second folder");
    }

    #[test]
    fn vendor_dir_nests_below_kaufteile() {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());

        let vendor = workdir.vendor_dir("Bosch").unwrap();
        assert_eq!(vendor, tmp.path().join("Kaufteile").join("Bosch"));
        assert!(!vendor.exists(), "vendor folders are created on acceptance");
    }

    #[test]
    fn vendors_lists_folder_names_sorted() {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());
        let kaufteile = workdir.kaufteile().unwrap();
        fs::create_dir(kaufteile.join("Misumi")).unwrap();
        fs::create_dir(kaufteile.join("Bosch")).unwrap();
        fs::write(kaufteile.join("notes.txt"), b"").unwrap();

        assert_eq!(workdir.vendors(), vec!["Bosch", "Misumi"]);
    }
}
