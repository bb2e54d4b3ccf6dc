use std::fmt;
use std::fs;
use std::path::Path;

use numbering_engine::{is_valid_name, next_number, project_key, project_text};
use numwerk_types::{DocumentKind, PartCategory};
use tracing::debug;
use uuid::Uuid;
use working_dir::{WorkDirError, WorkingDir};

use crate::classify::{Classification, StockInfo};

/// Lifecycle of a classification dialog session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed from document metadata but not yet seeded.
    Uninitialized,
    /// Editing the make/customer branch.
    EditingMakeOrCustomer,
    /// Editing the buy branch.
    EditingBuy,
    /// Terminal: a classification was produced.
    Accepted,
    /// Terminal: the user aborted, nothing was produced.
    Cancelled,
}

/// A text field subject to the shared naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PartNumber,
    Description,
    Vendor,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::PartNumber => "part number",
            Field::Description => "description",
            Field::Vendor => "vendor",
        })
    }
}

/// Errors from a classification session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The named field fails the naming rule; the form should return focus
    /// to it. The session stays editable.
    #[error("{field} fails the naming rule (3+ characters, none of \\ / : * ? < > | \")")]
    InvalidField { field: Field },

    #[error("recursive expansion of bought assemblies is not supported")]
    RecursiveUnsupported,

    #[error("session is {state:?}, no longer editable")]
    NotEditable { state: SessionState },

    #[error(transparent)]
    WorkDir(#[from] WorkDirError),
}

/// One classification dialog session for a part or assembly document.
///
/// The session owns the whole form state; a rendering layer only mirrors it.
/// Construct it from the document's current metadata, seed it with [`load`],
/// edit it through the setters, and close it with [`confirm`] or [`cancel`].
/// The filename preview is a pure function of the fields; re-render it
/// after every mutation.
///
/// [`load`]: SaveSession::load
/// [`confirm`]: SaveSession::confirm
/// [`cancel`]: SaveSession::cancel
#[derive(Debug)]
pub struct SaveSession {
    id: Uuid,
    kind: DocumentKind,
    state: SessionState,
    project_name: String,
    suffix: String,

    category: PartCategory,
    part_number: String,
    description: String,
    vendor: String,
    vendors: Vec<String>,
    main_assembly: bool,
    recursive: bool,

    stock_dimensions: String,
    is_round: bool,
    refresh_on_save: bool,

    // metadata as it came in, used when a branch re-seeds
    incoming_part_number: String,
    incoming_description: String,
    incoming_vendor: String,
}

impl SaveSession {
    /// Session for a part document.
    pub fn part(
        project_name: impl Into<String>,
        vendor: impl Into<String>,
        part_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(DocumentKind::Part, project_name, vendor, part_number, description)
    }

    /// Session for an assembly document. Assemblies offer the make and buy
    /// branches only.
    pub fn assembly(
        project_name: impl Into<String>,
        vendor: impl Into<String>,
        part_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            DocumentKind::Assembly,
            project_name,
            vendor,
            part_number,
            description,
        )
    }

    fn new(
        kind: DocumentKind,
        project_name: impl Into<String>,
        vendor: impl Into<String>,
        part_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        debug_assert!(
            matches!(kind, DocumentKind::Part | DocumentKind::Assembly),
            "drawings go through the host's native dialog"
        );
        let vendor = vendor.into();
        let part_number = part_number.into();
        let description = description.into();
        Self {
            id: Uuid::new_v4(),
            kind,
            state: SessionState::Uninitialized,
            project_name: project_name.into(),
            suffix: kind.default_extension().to_string(),
            category: PartCategory::MakePart,
            part_number: part_number.clone(),
            description: description.clone(),
            vendor: vendor.clone(),
            vendors: Vec::new(),
            main_assembly: false,
            recursive: false,
            stock_dimensions: String::new(),
            is_round: false,
            refresh_on_save: true,
            incoming_part_number: part_number,
            incoming_description: description,
            incoming_vendor: vendor,
        }
    }

    /// Override the filename extension (defaults to the document kind's).
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn category(&self) -> PartCategory {
        self.category
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Vendor suggestions collected from the vendor folders on load.
    pub fn vendors(&self) -> &[String] {
        &self.vendors
    }

    pub fn main_assembly(&self) -> bool {
        self.main_assembly
    }

    pub fn stock_dimensions(&self) -> &str {
        &self.stock_dimensions
    }

    pub fn is_round(&self) -> bool {
        self.is_round
    }

    pub fn refresh_on_save(&self) -> bool {
        self.refresh_on_save
    }

    /// Routing key of the owning project.
    pub fn project_key(&self) -> &str {
        project_key(&self.project_name)
    }

    /// Seed defaults and enter the editing state.
    ///
    /// Vendor candidates come from the vendor folders on disk. A non-blank
    /// incoming vendor selects the buy branch directly; otherwise the make
    /// branch seeds a freshly scanned part number. Assemblies additionally
    /// probe the CAD folder for an existing main-assembly file to decide
    /// between the `_B` main number and a scanned `_B` sub number.
    pub fn load(&mut self, workdir: &WorkingDir) -> Result<(), SessionError> {
        debug_assert_eq!(self.state, SessionState::Uninitialized);

        self.vendors = workdir.vendors();
        if self.kind == DocumentKind::Assembly {
            self.main_assembly = !self.has_main_assembly_file(&workdir.cad()?);
        }

        let incoming_vendor = self.incoming_vendor.trim().to_string();
        if !incoming_vendor.is_empty() {
            if !self
                .vendors
                .iter()
                .any(|v| v.eq_ignore_ascii_case(&incoming_vendor))
            {
                self.vendors.push(incoming_vendor.clone());
                self.vendors.sort();
            }
            self.enter_buy();
        } else {
            self.seed_make(workdir)?;
            self.state = SessionState::EditingMakeOrCustomer;
        }

        debug!(
            session = %self.id,
            kind = ?self.kind,
            state = ?self.state,
            part_number = %self.part_number,
            "session seeded"
        );
        Ok(())
    }

    /// Toggle the part category and re-seed that branch's defaults.
    ///
    /// Stays within the editing states; the preview should be re-rendered
    /// afterwards.
    pub fn set_category(
        &mut self,
        category: PartCategory,
        workdir: &WorkingDir,
    ) -> Result<(), SessionError> {
        self.ensure_editing()?;
        debug_assert!(
            self.kind == DocumentKind::Part || category != PartCategory::CustomerPart,
            "assemblies offer the make and buy branches only"
        );

        match category {
            PartCategory::MakePart => {
                self.seed_make(workdir)?;
                self.state = SessionState::EditingMakeOrCustomer;
            }
            PartCategory::CustomerPart => {
                self.category = PartCategory::CustomerPart;
                let prefix = format!("{}_K", self.project_key_owned());
                self.part_number = next_number(&prefix, &self.suffix, &workdir.kundenteile()?);
                self.state = SessionState::EditingMakeOrCustomer;
            }
            PartCategory::BuyPart => self.enter_buy(),
        }

        debug!(session = %self.id, ?category, part_number = %self.part_number, "category toggled");
        Ok(())
    }

    /// Mark an assembly as the project's main assembly (or not) and re-seed
    /// the make branch accordingly.
    pub fn set_main_assembly(
        &mut self,
        main_assembly: bool,
        workdir: &WorkingDir,
    ) -> Result<(), SessionError> {
        self.ensure_editing()?;
        debug_assert_eq!(self.kind, DocumentKind::Assembly);

        self.main_assembly = main_assembly;
        if self.category == PartCategory::MakePart {
            self.seed_make(workdir)?;
        }
        Ok(())
    }

    pub fn set_part_number(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editing()?;
        self.part_number = text.into();
        Ok(())
    }

    pub fn set_description(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editing()?;
        self.description = text.into();
        Ok(())
    }

    pub fn set_vendor(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editing()?;
        self.vendor = text.into();
        Ok(())
    }

    pub fn set_round(&mut self, is_round: bool) -> Result<(), SessionError> {
        self.ensure_editing()?;
        self.is_round = is_round;
        Ok(())
    }

    pub fn set_refresh_on_save(&mut self, refresh: bool) -> Result<(), SessionError> {
        self.ensure_editing()?;
        self.refresh_on_save = refresh;
        Ok(())
    }

    pub fn set_stock_dimensions(&mut self, dimensions: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editing()?;
        self.stock_dimensions = dimensions.into();
        Ok(())
    }

    /// Request recursive expansion of a bought assembly.
    ///
    /// The option exists in the data model but is not supported: enabling it
    /// fails with an explicit error and the flag stays false.
    pub fn set_recursive(&mut self, recursive: bool) -> Result<(), SessionError> {
        self.ensure_editing()?;
        if recursive {
            return Err(SessionError::RecursiveUnsupported);
        }
        self.recursive = false;
        Ok(())
    }

    /// The filename the current form state would produce.
    ///
    /// Pure function of the field values; call after every mutation to
    /// refresh a live preview.
    pub fn preview(&self) -> String {
        match self.category {
            PartCategory::BuyPart => format!(
                "{}_{}_{}.{}",
                self.vendor.trim(),
                self.part_number.trim(),
                self.description.trim(),
                self.suffix
            ),
            _ => format!(
                "{}_{}.{}",
                self.part_number.trim(),
                self.description.trim(),
                self.suffix
            ),
        }
    }

    /// Validate the form and close the session with a classification.
    ///
    /// On a validation failure the error names the offending field and the
    /// session stays editable; nothing has been written anywhere at this
    /// point, so cancelling afterwards still has no side effects.
    pub fn confirm(&mut self) -> Result<Classification, SessionError> {
        self.ensure_editing()?;

        let part_number = self.part_number.trim().to_string();
        if !is_valid_name(&part_number) {
            return Err(SessionError::InvalidField {
                field: Field::PartNumber,
            });
        }
        let description = self.description.trim().to_string();
        if !is_valid_name(&description) {
            return Err(SessionError::InvalidField {
                field: Field::Description,
            });
        }
        let vendor = if self.category == PartCategory::BuyPart {
            let vendor = self.vendor.trim().to_string();
            if !is_valid_name(&vendor) {
                return Err(SessionError::InvalidField {
                    field: Field::Vendor,
                });
            }
            vendor
        } else {
            String::new()
        };

        self.part_number = part_number.clone();
        self.description = description.clone();
        self.vendor = vendor.clone();
        self.state = SessionState::Accepted;

        let stock = (self.kind == DocumentKind::Part
            && self.category == PartCategory::MakePart)
            .then(|| StockInfo {
                dimensions: self.stock_dimensions.trim().to_string(),
                is_round: self.is_round,
                refresh_on_save: self.refresh_on_save,
            });
        let recursive = (self.kind == DocumentKind::Assembly
            && self.category == PartCategory::BuyPart)
            .then_some(self.recursive);

        debug!(session = %self.id, category = ?self.category, part_number = %part_number, "session accepted");
        Ok(Classification {
            category: self.category,
            part_number,
            description,
            vendor,
            recursive,
            stock,
        })
    }

    /// Abort the session. Terminal; nothing is produced and nothing was
    /// written.
    pub fn cancel(&mut self) {
        debug!(session = %self.id, "session cancelled");
        self.state = SessionState::Cancelled;
    }

    fn ensure_editing(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::EditingMakeOrCustomer | SessionState::EditingBuy => Ok(()),
            state => Err(SessionError::NotEditable { state }),
        }
    }

    fn enter_buy(&mut self) {
        self.category = PartCategory::BuyPart;
        self.part_number = self.incoming_part_number.clone();
        self.vendor = self.incoming_vendor.trim().to_string();
        self.state = SessionState::EditingBuy;
    }

    /// Seed the make branch: parts get the next `_T` number; assemblies get
    /// the `_B` main number or a scanned `_B` sub number, with incoming
    /// non-blank values taking precedence.
    fn seed_make(&mut self, workdir: &WorkingDir) -> Result<(), SessionError> {
        self.category = PartCategory::MakePart;
        let key = self.project_key_owned();

        match self.kind {
            DocumentKind::Part => {
                let prefix = format!("{key}_T");
                self.part_number = next_number(&prefix, &self.suffix, &workdir.cad()?);
            }
            _ => {
                if self.main_assembly {
                    self.part_number = if self.incoming_part_number.trim().is_empty() {
                        format!("{key}_B")
                    } else {
                        self.incoming_part_number.clone()
                    };
                    self.description = if self.incoming_description.trim().is_empty() {
                        project_text(&self.project_name).to_string()
                    } else {
                        self.incoming_description.clone()
                    };
                } else {
                    self.part_number = if self.incoming_part_number.trim().is_empty() {
                        let prefix = format!("{key}_B");
                        next_number(&prefix, &self.suffix, &workdir.cad()?)
                    } else {
                        self.incoming_part_number.clone()
                    };
                    self.description = if self.incoming_description.trim().is_empty() {
                        String::new()
                    } else {
                        self.incoming_description.clone()
                    };
                }
            }
        }
        Ok(())
    }

    /// A `{key}_B_*.{suffix}` file in the CAD folder means the project's
    /// main assembly already exists.
    fn has_main_assembly_file(&self, cad: &Path) -> bool {
        let needle = format!("{}_B_", self.project_key());
        let extension = format!(".{}", self.suffix.to_ascii_lowercase());

        fs::read_dir(cad).map_or(false, |entries| {
            entries.flatten().any(|entry| {
                let name = entry.file_name();
                let Some(name) = name.to_str() else {
                    return false;
                };
                name.starts_with(&needle) && name.to_ascii_lowercase().ends_with(&extension)
            })
        })
    }

    fn project_key_owned(&self) -> String {
        self.project_key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn workdir() -> (TempDir, WorkingDir) {
        let tmp = TempDir::new().unwrap();
        let workdir = WorkingDir::new(tmp.path());
        (tmp, workdir)
    }

    #[test]
    fn part_without_vendor_starts_in_make_branch() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();

        assert_eq!(session.state(), SessionState::EditingMakeOrCustomer);
        assert_eq!(session.category(), PartCategory::MakePart);
        assert_eq!(session.part_number(), "PV001_T001");
        assert_eq!(session.description(), "");
    }

    #[test]
    fn part_with_vendor_starts_in_buy_branch() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "Bosch", "4711", "Winkel");
        session.load(&workdir).unwrap();

        assert_eq!(session.state(), SessionState::EditingBuy);
        assert_eq!(session.category(), PartCategory::BuyPart);
        assert_eq!(session.part_number(), "4711");
        assert_eq!(session.vendor(), "Bosch");
        assert_eq!(session.vendors(), ["Bosch"]);
    }

    #[test]
    fn make_seed_scans_existing_t_numbers() {
        let (_tmp, workdir) = workdir();
        let cad = workdir.cad().unwrap();
        fs::write(cad.join("PV001_T001_Deckel.ipt"), b"").unwrap();
        fs::write(cad.join("PV001_T007_Platte.ipt"), b"").unwrap();

        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        assert_eq!(session.part_number(), "PV001_T008");
    }

    #[test]
    fn toggling_to_customer_scans_kundenteile() {
        let (_tmp, workdir) = workdir();
        let kundenteile = workdir.kundenteile().unwrap();
        fs::write(kundenteile.join("PV001_K002_Adapter.ipt"), b"").unwrap();

        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        session
            .set_category(PartCategory::CustomerPart, &workdir)
            .unwrap();

        assert_eq!(session.category(), PartCategory::CustomerPart);
        assert_eq!(session.part_number(), "PV001_K003");
        assert_eq!(session.state(), SessionState::EditingMakeOrCustomer);
    }

    #[test]
    fn toggling_to_buy_restores_incoming_part_number() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "", "4711", "Winkel");
        session.load(&workdir).unwrap();
        assert_eq!(session.part_number(), "PV001_T001");

        session.set_category(PartCategory::BuyPart, &workdir).unwrap();
        assert_eq!(session.state(), SessionState::EditingBuy);
        assert_eq!(session.part_number(), "4711");
    }

    #[test]
    fn assembly_without_main_file_seeds_main_number_and_project_text() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::assembly("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();

        assert!(session.main_assembly());
        assert_eq!(session.part_number(), "PV001_B");
        assert_eq!(session.description(), "Gehäuse");
    }

    #[test]
    fn assembly_with_main_file_seeds_scanned_sub_number() {
        let (_tmp, workdir) = workdir();
        let cad = workdir.cad().unwrap();
        fs::write(cad.join("PV001_B_Gehäuse.iam"), b"").unwrap();
        fs::write(cad.join("PV001_B003_Rahmen.iam"), b"").unwrap();

        let mut session = SaveSession::assembly("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();

        assert!(!session.main_assembly());
        assert_eq!(session.part_number(), "PV001_B004");
        assert_eq!(session.description(), "");
    }

    #[test]
    fn assembly_keeps_incoming_values_over_seeds() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::assembly("PV001_Gehäuse", "", "PV001_B002", "Rahmen");
        session.load(&workdir).unwrap();

        assert_eq!(session.part_number(), "PV001_B002");
        assert_eq!(session.description(), "Rahmen");
    }

    #[test]
    fn main_assembly_toggle_reseeds() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::assembly("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        assert_eq!(session.part_number(), "PV001_B");

        session.set_main_assembly(false, &workdir).unwrap();
        assert_eq!(session.part_number(), "PV001_B001");
        assert_eq!(session.description(), "");

        session.set_main_assembly(true, &workdir).unwrap();
        assert_eq!(session.part_number(), "PV001_B");
        assert_eq!(session.description(), "Gehäuse");
    }

    #[test]
    fn preview_matches_filename_rules() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        session.set_description(" Deckel ").unwrap();
        assert_eq!(session.preview(), "PV001_T001_Deckel.ipt");

        session.set_category(PartCategory::BuyPart, &workdir).unwrap();
        session.set_vendor("Bosch").unwrap();
        session.set_part_number("4711").unwrap();
        session.set_description("Winkel").unwrap();
        assert_eq!(session.preview(), "Bosch_4711_Winkel.ipt");
    }

    #[test]
    fn confirm_rejects_invalid_description_and_stays_editable() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        session.set_description("De").unwrap();

        let err = session.confirm().unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidField {
                field: Field::Description
            }
        ));
        assert_eq!(session.state(), SessionState::EditingMakeOrCustomer);

        session.set_description("Deckel").unwrap();
        assert!(session.confirm().is_ok());
    }

    #[test]
    fn confirm_requires_vendor_in_buy_branch() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        session.set_category(PartCategory::BuyPart, &workdir).unwrap();
        session.set_part_number("4711").unwrap();
        session.set_description("Winkel").unwrap();

        let err = session.confirm().unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidField {
                field: Field::Vendor
            }
        ));

        session.set_vendor("Bosch").unwrap();
        let classification = session.confirm().unwrap();
        assert_eq!(classification.vendor, "Bosch");
        assert_eq!(session.state(), SessionState::Accepted);
    }

    #[test]
    fn confirm_trims_fields_and_emits_stock_for_made_parts() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        session.set_description("  Deckel  ").unwrap();
        session.set_stock_dimensions("30x20x10").unwrap();
        session.set_round(false).unwrap();
        session.set_refresh_on_save(true).unwrap();

        let classification = session.confirm().unwrap();
        assert_eq!(classification.part_number, "PV001_T001");
        assert_eq!(classification.description, "Deckel");
        assert_eq!(classification.vendor, "");
        let stock = classification.stock.unwrap();
        assert_eq!(stock.dimensions, "30x20x10");
        assert!(stock.refresh_on_save);
        assert!(!stock.is_round);
    }

    #[test]
    fn bought_assembly_reports_recursive_disabled() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::assembly("PV001_Gehäuse", "Misumi", "4711", "Zylinder");
        session.load(&workdir).unwrap();

        let classification = session.confirm().unwrap();
        assert_eq!(classification.recursive, Some(false));
        assert!(classification.stock.is_none());
    }

    #[test]
    fn recursive_option_is_rejected_as_unsupported() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::assembly("PV001_Gehäuse", "Misumi", "4711", "Zylinder");
        session.load(&workdir).unwrap();

        let err = session.set_recursive(true).unwrap_err();
        assert!(matches!(err, SessionError::RecursiveUnsupported));
        assert!(session.set_recursive(false).is_ok());
    }

    #[test]
    fn terminal_states_reject_edits() {
        let (_tmp, workdir) = workdir();
        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "");
        session.load(&workdir).unwrap();
        session.set_description("Deckel").unwrap();
        session.confirm().unwrap();

        let err = session.set_description("Boden").unwrap_err();
        assert!(matches!(
            err,
            SessionError::NotEditable {
                state: SessionState::Accepted
            }
        ));

        let mut cancelled = SaveSession::part("PV001_Gehäuse", "", "", "");
        cancelled.load(&workdir).unwrap();
        cancelled.cancel();
        assert_eq!(cancelled.state(), SessionState::Cancelled);
        assert!(cancelled.confirm().is_err());
    }

    #[test]
    fn custom_suffix_flows_into_seeds_and_preview() {
        let (_tmp, workdir) = workdir();
        let cad = workdir.cad().unwrap();
        fs::write(cad.join("PV001_T004_Deckel.stp"), b"").unwrap();

        let mut session = SaveSession::part("PV001_Gehäuse", "", "", "").with_suffix("stp");
        session.load(&workdir).unwrap();

        assert_eq!(session.part_number(), "PV001_T005");
        session.set_description("Deckel").unwrap();
        assert_eq!(session.preview(), "PV001_T005_Deckel.stp");
    }

    #[test]
    fn vendor_candidates_merge_incoming_vendor() {
        let (_tmp, workdir) = workdir();
        let kaufteile = workdir.kaufteile().unwrap();
        fs::create_dir(kaufteile.join("Misumi")).unwrap();

        let mut session = SaveSession::part("PV001_Gehäuse", "Bosch", "4711", "Winkel");
        session.load(&workdir).unwrap();
        assert_eq!(session.vendors(), ["Bosch", "Misumi"]);

        // an on-disk vendor is not duplicated
        let mut session = SaveSession::part("PV001_Gehäuse", "misumi", "4711", "Winkel");
        session.load(&workdir).unwrap();
        assert_eq!(session.vendors(), ["Misumi"]);
    }
}
