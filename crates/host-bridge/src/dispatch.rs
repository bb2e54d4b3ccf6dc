use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use classify_engine::{destination, Classification, SaveSession, SessionError};
use numwerk_types::{properties, DocumentKind, PartCategory, PropertyValue};
use tracing::{debug, error, info, info_span};
use uuid::Uuid;
use working_dir::{WorkDirError, WorkingDir};

use crate::drawing::{
    documentation_dir, drawing_file_stem, drawing_part_number, pdf_filter_index, DrawingSavePlan,
};
use crate::error_log::ErrorLog;
use crate::host::{ClassifyPrompt, DrawingPrompt, HostDocument, HostError, HostProject};
use crate::stock::{recalc_session_stock, refresh_stock};

/// File-save context handed over by the host event.
#[derive(Debug, Clone)]
pub struct SaveAsEvent {
    /// Candidate file-type filter strings, as supplied by the host.
    pub file_types: Vec<String>,
    /// The host is saving a copy rather than the document itself.
    pub save_copy_as: bool,
}

impl SaveAsEvent {
    pub fn save(file_types: Vec<String>) -> Self {
        Self {
            file_types,
            save_copy_as: false,
        }
    }

    pub fn save_copy(file_types: Vec<String>) -> Self {
        Self {
            file_types,
            save_copy_as: true,
        }
    }
}

/// Outcome reported back to the host save event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The engine computed the destination; the host should use it.
    Handled { path: PathBuf },
    /// Fall back to the host's native save behavior.
    NotHandled,
}

/// Errors surfaced at the dispatcher boundary.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    WorkDir(#[from] WorkDirError),

    #[error("cannot create vendor folder {path}: {source}")]
    VendorDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            DispatchError::Host(_) => "Host",
            DispatchError::Session(_) => "Session",
            DispatchError::WorkDir(_) => "WorkDir",
            DispatchError::VendorDir { .. } => "VendorDir",
        }
    }
}

/// Dispatcher configuration, supplied by the embedder.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Project names that never get engine treatment (the host's template
    /// projects).
    pub reserved_projects: Vec<String>,
    /// Destination of the append-only error log, outside the working tree.
    pub error_log: PathBuf,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            reserved_projects: vec!["MTL".to_string(), "Default".to_string()],
            error_log: env::temp_dir().join("numwerk-errors.jsonl"),
        }
    }
}

/// The save-as dispatcher.
///
/// One instance lives for the add-in lifetime; every host save event goes
/// through [`SaveDispatcher::on_save_as`], every before-save tick through
/// [`SaveDispatcher::on_before_save`].
pub struct SaveDispatcher {
    config: DispatchConfig,
    log: ErrorLog,
}

impl SaveDispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        let log = ErrorLog::new(&config.error_log);
        Self { config, log }
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.log
    }

    /// Handle a host save-as event.
    ///
    /// Unnamed or reserved projects, empty workspace paths, cancelled
    /// sessions and unexpected errors all leave the event not handled so the
    /// host falls back to its native dialog; unexpected errors additionally
    /// go to the error log. Document metadata is written only after a
    /// session was accepted.
    pub fn on_save_as(
        &self,
        project: &dyn HostProject,
        doc: &mut dyn HostDocument,
        event: &SaveAsEvent,
        classify: &mut dyn ClassifyPrompt,
        drawing: &mut dyn DrawingPrompt,
    ) -> SaveOutcome {
        let event_id = Uuid::new_v4();
        let span = info_span!("save_as", event = %event_id);
        let _guard = span.enter();

        let project_name = project.name();
        let Some(workspace) = project.workspace_path() else {
            debug!("no workspace path, deferring to host");
            return SaveOutcome::NotHandled;
        };
        if project_name.trim().is_empty()
            || self
                .config
                .reserved_projects
                .iter()
                .any(|reserved| reserved == &project_name)
        {
            debug!(project = %project_name, "unnamed or reserved project, deferring to host");
            return SaveOutcome::NotHandled;
        }

        let result = match doc.kind() {
            DocumentKind::Part | DocumentKind::Assembly if !event.save_copy_as => {
                self.classification_flow(&project_name, &workspace, doc, classify)
            }
            DocumentKind::Drawing => self.drawing_flow(&workspace, doc, event, drawing),
            _ => Ok(SaveOutcome::NotHandled),
        };

        match result {
            Ok(outcome) => {
                if let SaveOutcome::Handled { path } = &outcome {
                    info!(path = %path.display(), "save-as handled");
                }
                outcome
            }
            Err(err) => {
                error!(%err, "save-as flow failed, deferring to host");
                self.log.append(event_id, &err);
                SaveOutcome::NotHandled
            }
        }
    }

    /// Host "before save" hook: keep part stock properties up to date.
    pub fn on_before_save(&self, doc: &mut dyn HostDocument) {
        if doc.kind() != DocumentKind::Part {
            return;
        }
        let event_id = Uuid::new_v4();
        if let Err(err) = refresh_stock(doc) {
            error!(event = %event_id, %err, "stock refresh failed");
            self.log.append(event_id, &err);
        }
    }

    /// Shared part/assembly flow: seed a session, run the form, write the
    /// accepted classification back and derive the destination path.
    fn classification_flow(
        &self,
        project_name: &str,
        workspace: &Path,
        doc: &mut dyn HostDocument,
        prompt: &mut dyn ClassifyPrompt,
    ) -> Result<SaveOutcome, DispatchError> {
        let workdir = WorkingDir::new(workspace);
        let vendor = text_property(doc, properties::VENDOR);
        let part_number = text_property(doc, properties::PART_NUMBER);
        let description = text_property(doc, properties::DESCRIPTION);

        let mut session = match doc.kind() {
            DocumentKind::Part => SaveSession::part(project_name, vendor, part_number, description),
            _ => SaveSession::assembly(project_name, vendor, part_number, description),
        };
        session.load(&workdir)?;

        // seed the stock preview before the form opens
        if let Some(geometry) = doc.geometry() {
            recalc_session_stock(&mut session, geometry)?;
        }

        let Some(classification) = prompt.run(&mut session, &workdir, doc.geometry()) else {
            debug!("classification cancelled, deferring to host");
            return Ok(SaveOutcome::NotHandled);
        };

        self.apply_classification(project_name, doc, &classification)?;

        let (folder, filename) = destination(&workdir, &classification, session.suffix())?;
        if classification.category == PartCategory::BuyPart {
            fs::create_dir_all(&folder).map_err(|source| DispatchError::VendorDir {
                path: folder.clone(),
                source,
            })?;
        }

        Ok(SaveOutcome::Handled {
            path: folder.join(filename),
        })
    }

    /// Write an accepted classification into the document metadata.
    fn apply_classification(
        &self,
        project_name: &str,
        doc: &mut dyn HostDocument,
        classification: &Classification,
    ) -> Result<(), DispatchError> {
        doc.set_property(
            properties::VENDOR,
            PropertyValue::text(classification.vendor.clone()),
        )?;
        doc.set_property(
            properties::PART_NUMBER,
            PropertyValue::text(classification.part_number.clone()),
        )?;
        doc.set_property(
            properties::DESCRIPTION,
            PropertyValue::text(classification.description.clone()),
        )?;
        doc.set_property(properties::PROJECT, PropertyValue::text(project_name))?;

        if let Some(stock) = &classification.stock {
            doc.set_property(
                properties::STOCK_DIMENSIONS,
                PropertyValue::text(stock.dimensions.clone()),
            )?;
            doc.set_property(
                properties::REFRESH_STOCK,
                PropertyValue::bool(stock.refresh_on_save),
            )?;
            doc.set_property(properties::IS_ROUND, PropertyValue::bool(stock.is_round))?;
        }

        doc.set_bom_structure(classification.category.bom_structure())?;
        Ok(())
    }

    /// Drawing flow: pre-seed the host's native dialog; metadata is written
    /// only once the user picked a destination.
    fn drawing_flow(
        &self,
        workspace: &Path,
        doc: &mut dyn HostDocument,
        event: &SaveAsEvent,
        prompt: &mut dyn DrawingPrompt,
    ) -> Result<SaveOutcome, DispatchError> {
        if event.save_copy_as {
            let Some(full) = doc.full_file_name() else {
                debug!("unsaved drawing copy, deferring to host");
                return Ok(SaveOutcome::NotHandled);
            };
            let plan = DrawingSavePlan {
                initial_dir: documentation_dir(workspace),
                file_stem: file_stem_of(&full),
                file_types: event.file_types.clone(),
                filter_index: pdf_filter_index(&event.file_types),
            };
            return Ok(match prompt.run(&plan) {
                Some(path) => SaveOutcome::Handled { path },
                None => SaveOutcome::NotHandled,
            });
        }

        let Some(referenced) = doc.first_referenced() else {
            debug!("drawing references no document, deferring to host");
            return Ok(SaveOutcome::NotHandled);
        };

        let plan = DrawingSavePlan {
            initial_dir: referenced
                .full_file_name
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| workspace.to_path_buf()),
            file_stem: drawing_file_stem(&file_stem_of(&referenced.full_file_name)),
            file_types: event.file_types.clone(),
            filter_index: None,
        };
        let Some(path) = prompt.run(&plan) else {
            debug!("drawing dialog cancelled, deferring to host");
            return Ok(SaveOutcome::NotHandled);
        };

        let part_number = drawing_part_number(&referenced.part_number)
            .unwrap_or_else(|| referenced.part_number.clone());
        doc.set_property(properties::PART_NUMBER, PropertyValue::text(part_number))?;
        doc.set_property(
            properties::DESCRIPTION,
            PropertyValue::text(referenced.description.clone()),
        )?;
        doc.set_property(
            properties::PROJECT,
            PropertyValue::text(referenced.project.clone()),
        )?;

        Ok(SaveOutcome::Handled { path })
    }
}

fn text_property(doc: &dyn HostDocument, name: &str) -> String {
    doc.property(name)
        .and_then(PropertyValue::into_text)
        .unwrap_or_default()
}

fn file_stem_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}
