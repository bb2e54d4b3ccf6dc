//! Drawing saves keep the host's native dialog and only pre-seed it: the
//! drawing number mirrors the referenced model's number with a `Z` marker.

use std::path::{Path, PathBuf};

use regex::Regex;

/// Seed values for the host's native save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSavePlan {
    /// Directory the dialog opens in.
    pub initial_dir: PathBuf,
    /// Suggested filename without extension.
    pub file_stem: String,
    /// The host's file-type filter strings, passed through unchanged.
    pub file_types: Vec<String>,
    /// Index into `file_types` to preselect (PDF for drawing copies).
    pub filter_index: Option<usize>,
}

/// Rewrite a model part number into its drawing number:
/// `PV001_T001` → `PV001_ZT001`, `PV001_B001` → `PV001_ZB001`.
///
/// `None` when the part number does not follow the numbering convention;
/// the caller keeps it unchanged then.
pub fn drawing_part_number(part_number: &str) -> Option<String> {
    let re = Regex::new(r"^(.+_)([BT]\d+)$").expect("drawing number pattern is valid");
    re.captures(part_number)
        .map(|caps| format!("{}Z{}", &caps[1], &caps[2]))
}

/// Rewrite a model file stem into the drawing file stem:
/// `PV001_B001_Deckel` → `PV001_ZB001_Deckel`. Non-convention stems pass
/// through unchanged.
pub fn drawing_file_stem(stem: &str) -> String {
    let re = Regex::new(r"^(.+_)([BT]\d+_.+)$").expect("drawing stem pattern is valid");
    match re.captures(stem) {
        Some(caps) => format!("{}Z{}", &caps[1], &caps[2]),
        None => stem.to_string(),
    }
}

/// Folder for drawing copies: `Dokumentation/Zeichnungen` next to the
/// workspace root.
pub fn documentation_dir(workspace: &Path) -> PathBuf {
    workspace
        .parent()
        .unwrap_or(workspace)
        .join("Dokumentation")
        .join("Zeichnungen")
}

/// Position of the PDF entry in the host's file-type filter list, if any.
pub fn pdf_filter_index(file_types: &[String]) -> Option<usize> {
    file_types
        .iter()
        .position(|entry| entry.to_uppercase().contains("PDF"))
}
