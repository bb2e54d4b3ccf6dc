use std::path::PathBuf;

use classify_engine::{Classification, SaveSession};
use numbering_engine::FlatPatternSource;
use numwerk_types::{BomStructure, BoundingBox, DocumentKind, PropertyValue};
use working_dir::WorkingDir;

use crate::drawing::DrawingSavePlan;

/// A host API call that failed.
#[derive(Debug, thiserror::Error)]
#[error("host API failure: {0}")]
pub struct HostError(pub String);

/// The active design project, as reported by the host session.
pub trait HostProject {
    /// Project name; empty or whitespace-only means "no usable project".
    fn name(&self) -> String;

    /// Workspace root path from the project settings, if configured.
    fn workspace_path(&self) -> Option<PathBuf>;
}

/// Snapshot of a document referenced from a drawing view.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub part_number: String,
    pub description: String,
    pub project: String,
    pub full_file_name: PathBuf,
}

/// Geometry access for part documents.
pub trait PartGeometry: FlatPatternSource {
    /// Axis-aligned bounding box of the part in document length units.
    fn bounding_box(&self) -> BoundingBox;

    /// Sheet thickness when this is a sheet-metal part.
    fn sheet_thickness(&self) -> Option<f64>;

    /// View of the same geometry as a flat-pattern source.
    fn as_flat_pattern(&mut self) -> &mut dyn FlatPatternSource;
}

/// Read/write access to a document's named metadata fields.
///
/// Properties are created on first write and overwritten afterwards; reads
/// of absent properties return `None`.
pub trait HostDocument {
    fn kind(&self) -> DocumentKind;

    /// Absolute path of the document, once it has been saved.
    fn full_file_name(&self) -> Option<PathBuf>;

    fn property(&self, name: &str) -> Option<PropertyValue>;

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), HostError>;

    fn set_bom_structure(&mut self, bom: BomStructure) -> Result<(), HostError>;

    /// Geometry of a part document. `None` for assemblies and drawings.
    fn geometry(&mut self) -> Option<&mut dyn PartGeometry>;

    /// The document shown in a drawing's first view, if any.
    fn first_referenced(&self) -> Option<DocumentInfo>;
}

/// The interactive classification form.
///
/// Implementations render the [`SaveSession`] however they like and drive it
/// through its setters; they return the accepted classification, or `None`
/// after calling [`SaveSession::cancel`].
pub trait ClassifyPrompt {
    fn run(
        &mut self,
        session: &mut SaveSession,
        workdir: &WorkingDir,
        geometry: Option<&mut dyn PartGeometry>,
    ) -> Option<Classification>;
}

/// The host's native file dialog, used for drawing saves.
pub trait DrawingPrompt {
    /// Show the dialog seeded from `plan`; the chosen path, or `None` on
    /// cancel.
    fn run(&mut self, plan: &DrawingSavePlan) -> Option<PathBuf>;
}
