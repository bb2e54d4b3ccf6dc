use std::path::PathBuf;

use numwerk_types::PartCategory;
use serde::{Deserialize, Serialize};
use working_dir::{WorkDirError, WorkingDir};

/// The result of an accepted classification session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: PartCategory,
    pub part_number: String,
    pub description: String,
    /// Empty unless the part is bought.
    pub vendor: String,
    /// Recursive-expansion request, bought assemblies only. Always `false`:
    /// selecting the option is rejected as unsupported.
    pub recursive: Option<bool>,
    /// Stock tracking data, manufactured parts only.
    pub stock: Option<StockInfo>,
}

/// Stock tracking data written back to a manufactured part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    /// Reduced outer-dimension string, e.g. `"30x20x10"`.
    pub dimensions: String,
    /// Turned part; the dimension string reports diameter × length.
    pub is_round: bool,
    /// Recompute the dimension string on every save.
    pub refresh_on_save: bool,
}

/// Destination folder and filename for an accepted classification.
///
/// Manufactured parts file under the CAD folder, customer parts under
/// Kundenteile, bought parts under a vendor subfolder of Kaufteile with the
/// vendor repeated in the filename. The vendor folder itself is created by
/// the caller once the save goes through.
pub fn destination(
    workdir: &WorkingDir,
    classification: &Classification,
    suffix: &str,
) -> Result<(PathBuf, String), WorkDirError> {
    let c = classification;
    match c.category {
        PartCategory::MakePart => Ok((
            workdir.cad()?,
            format!("{}_{}.{}", c.part_number, c.description, suffix),
        )),
        PartCategory::CustomerPart => Ok((
            workdir.kundenteile()?,
            format!("{}_{}.{}", c.part_number, c.description, suffix),
        )),
        PartCategory::BuyPart => Ok((
            workdir.vendor_dir(&c.vendor)?,
            format!("{}_{}_{}.{}", c.vendor, c.part_number, c.description, suffix),
        )),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn classification(category: PartCategory, vendor: &str) -> Classification {
        Classification {
            category,
            part_number: "PV001_T004".to_string(),
            description: "Deckel".to_string(),
            vendor: vendor.to_string(),
            recursive: None,
            stock: None,
        }
    }

    #[test]
    fn make_part_files_under_cad() {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());

        let (folder, filename) =
            destination(&workdir, &classification(PartCategory::MakePart, ""), "ipt").unwrap();
        assert_eq!(folder, tmp.path().join("CAD"));
        assert_eq!(filename, "PV001_T004_Deckel.ipt");
    }

    #[test]
    fn customer_part_files_under_kundenteile() {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());

        let (folder, filename) = destination(
            &workdir,
            &classification(PartCategory::CustomerPart, ""),
            "ipt",
        )
        .unwrap();
        assert_eq!(folder, tmp.path().join("Kundenteile"));
        assert_eq!(filename, "PV001_T004_Deckel.ipt");
    }

    #[test]
    fn buy_part_files_under_vendor_folder_with_vendor_prefix() {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());

        let (folder, filename) = destination(
            &workdir,
            &classification(PartCategory::BuyPart, "Bosch"),
            "iam",
        )
        .unwrap();
        assert_eq!(folder, tmp.path().join("Kaufteile").join("Bosch"));
        assert_eq!(filename, "Bosch_PV001_T004_Deckel.iam");
    }
}
