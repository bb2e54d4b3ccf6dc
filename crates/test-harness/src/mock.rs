//! Trait implementations standing in for the host CAD application.

use std::collections::HashMap;
use std::path::PathBuf;

use classify_engine::{Classification, SaveSession};
use host_bridge::{
    ClassifyPrompt, DocumentInfo, DrawingPrompt, DrawingSavePlan, HostDocument, HostError,
    HostProject, PartGeometry,
};
use numbering_engine::FlatPatternSource;
use numwerk_types::{BomStructure, BoundingBox, DocumentKind, PropertyValue};
use working_dir::WorkingDir;

/// Scripted active project.
#[derive(Debug, Clone)]
pub struct MockProject {
    pub name: String,
    pub workspace: Option<PathBuf>,
}

impl MockProject {
    pub fn new(name: impl Into<String>, workspace: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            workspace,
        }
    }
}

impl HostProject for MockProject {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn workspace_path(&self) -> Option<PathBuf> {
        self.workspace.clone()
    }
}

/// Part geometry with a fixed bounding box and optional flat pattern.
#[derive(Debug, Clone)]
pub struct MockGeometry {
    pub bbox: BoundingBox,
    pub sheet_thickness: Option<f64>,
    pub flat_pattern: Option<BoundingBox>,
    /// How often a flat pattern was requested (the host would unfold here).
    pub unfold_requests: usize,
}

impl MockGeometry {
    pub fn solid(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            sheet_thickness: None,
            flat_pattern: None,
            unfold_requests: 0,
        }
    }

    pub fn sheet_metal(bbox: BoundingBox, thickness: f64, flat_pattern: Option<BoundingBox>) -> Self {
        Self {
            bbox,
            sheet_thickness: Some(thickness),
            flat_pattern,
            unfold_requests: 0,
        }
    }
}

impl FlatPatternSource for MockGeometry {
    fn flat_pattern_box(&mut self) -> Option<BoundingBox> {
        self.unfold_requests += 1;
        self.flat_pattern
    }
}

impl PartGeometry for MockGeometry {
    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn sheet_thickness(&self) -> Option<f64> {
        self.sheet_thickness
    }

    fn as_flat_pattern(&mut self) -> &mut dyn FlatPatternSource {
        self
    }
}

/// In-memory document with a plain property map.
#[derive(Debug, Default)]
pub struct MockDocument {
    kind: Option<DocumentKind>,
    pub properties: HashMap<String, PropertyValue>,
    pub bom_structure: Option<BomStructure>,
    pub geometry: Option<MockGeometry>,
    pub referenced: Option<DocumentInfo>,
    pub full_file_name: Option<PathBuf>,
    /// Property names whose writes fail, to exercise the error path.
    pub failing_properties: Vec<String>,
}

impl MockDocument {
    pub fn part() -> Self {
        Self {
            kind: Some(DocumentKind::Part),
            ..Self::default()
        }
    }

    pub fn assembly() -> Self {
        Self {
            kind: Some(DocumentKind::Assembly),
            ..Self::default()
        }
    }

    pub fn drawing() -> Self {
        Self {
            kind: Some(DocumentKind::Drawing),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, name: &str, value: PropertyValue) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }

    pub fn with_geometry(mut self, geometry: MockGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_referenced(mut self, referenced: DocumentInfo) -> Self {
        self.referenced = Some(referenced);
        self
    }

    pub fn with_full_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.full_file_name = Some(path.into());
        self
    }

    pub fn failing_property(mut self, name: &str) -> Self {
        self.failing_properties.push(name.to_string());
        self
    }

    pub fn text_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(PropertyValue::as_text)
    }

    pub fn bool_property(&self, name: &str) -> Option<bool> {
        self.properties.get(name).and_then(PropertyValue::as_bool)
    }
}

impl HostDocument for MockDocument {
    fn kind(&self) -> DocumentKind {
        self.kind.expect("mock document kind")
    }

    fn full_file_name(&self) -> Option<PathBuf> {
        self.full_file_name.clone()
    }

    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), HostError> {
        if self.failing_properties.iter().any(|p| p == name) {
            return Err(HostError(format!("property '{name}' is locked")));
        }
        self.properties.insert(name.to_string(), value);
        Ok(())
    }

    fn set_bom_structure(&mut self, bom: BomStructure) -> Result<(), HostError> {
        self.bom_structure = Some(bom);
        Ok(())
    }

    fn geometry(&mut self) -> Option<&mut dyn PartGeometry> {
        self.geometry
            .as_mut()
            .map(|geometry| geometry as &mut dyn PartGeometry)
    }

    fn first_referenced(&self) -> Option<DocumentInfo> {
        self.referenced.clone()
    }
}

type Script = Box<
    dyn FnMut(
        &mut SaveSession,
        &WorkingDir,
        Option<&mut dyn PartGeometry>,
    ) -> Option<Classification>,
>;

/// Classification prompt driven by a closure instead of a dialog.
pub struct ScriptedPrompt {
    script: Script,
}

impl ScriptedPrompt {
    pub fn new(
        script: impl FnMut(
                &mut SaveSession,
                &WorkingDir,
                Option<&mut dyn PartGeometry>,
            ) -> Option<Classification>
            + 'static,
    ) -> Self {
        Self {
            script: Box::new(script),
        }
    }

    /// Accept the seeded defaults unchanged.
    pub fn accept_defaults() -> Self {
        Self::new(|session, _, _| session.confirm().ok())
    }

    /// Abort the session immediately.
    pub fn cancelling() -> Self {
        Self::new(|session, _, _| {
            session.cancel();
            None
        })
    }

    /// Fail the test when the dispatcher opens the form at all.
    pub fn unreachable() -> Self {
        Self::new(|_, _, _| panic!("the classification form must not open"))
    }
}

impl ClassifyPrompt for ScriptedPrompt {
    fn run(
        &mut self,
        session: &mut SaveSession,
        workdir: &WorkingDir,
        geometry: Option<&mut dyn PartGeometry>,
    ) -> Option<Classification> {
        (self.script)(session, workdir, geometry)
    }
}

/// Drawing dialog that accepts the seeded suggestion with a fixed extension.
#[derive(Debug, Default)]
pub struct AcceptingDrawingPrompt {
    pub extension: String,
    pub last_plan: Option<DrawingSavePlan>,
}

impl AcceptingDrawingPrompt {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            last_plan: None,
        }
    }
}

impl DrawingPrompt for AcceptingDrawingPrompt {
    fn run(&mut self, plan: &DrawingSavePlan) -> Option<PathBuf> {
        self.last_plan = Some(plan.clone());
        Some(
            plan.initial_dir
                .join(format!("{}.{}", plan.file_stem, self.extension)),
        )
    }
}

/// Drawing dialog the user always cancels.
#[derive(Debug, Default)]
pub struct CancellingDrawingPrompt {
    pub last_plan: Option<DrawingSavePlan>,
}

impl DrawingPrompt for CancellingDrawingPrompt {
    fn run(&mut self, plan: &DrawingSavePlan) -> Option<PathBuf> {
        self.last_plan = Some(plan.clone());
        None
    }
}
