//! SaveScenario: fluent driver for whole save-as round trips.
//!
//! Wraps a [`ProjectFixture`], a [`MockProject`] and a real
//! [`SaveDispatcher`] so scenario tests run the actual dispatch path, not a
//! simulation.

use std::fs;

use host_bridge::{
    ClassifyPrompt, DispatchConfig, DrawingPrompt, SaveAsEvent, SaveDispatcher, SaveOutcome,
};
use working_dir::WorkingDir;

use crate::helpers::ProjectFixture;
use crate::mock::{CancellingDrawingPrompt, MockDocument, MockProject};

/// One project plus one dispatcher, ready to replay save events.
pub struct SaveScenario {
    fixture: ProjectFixture,
    project: MockProject,
    dispatcher: SaveDispatcher,
}

impl SaveScenario {
    /// Scenario with a named project and a fresh workspace on disk.
    pub fn new(project_name: &str) -> Self {
        let fixture = ProjectFixture::new();
        let project = MockProject::new(project_name, Some(fixture.workspace().to_path_buf()));
        let config = DispatchConfig {
            error_log: fixture.root().join("errors.jsonl"),
            ..DispatchConfig::default()
        };
        Self {
            fixture,
            project,
            dispatcher: SaveDispatcher::new(config),
        }
    }

    /// Scenario whose project has no configured workspace path.
    pub fn without_workspace(project_name: &str) -> Self {
        let mut scenario = Self::new(project_name);
        scenario.project.workspace = None;
        scenario
    }

    pub fn fixture(&self) -> &ProjectFixture {
        &self.fixture
    }

    pub fn dispatcher(&self) -> &SaveDispatcher {
        &self.dispatcher
    }

    pub fn workdir(&self) -> WorkingDir {
        WorkingDir::new(self.fixture.workspace())
    }

    /// Dispatch a plain save of `doc` through `classify`.
    pub fn save(&self, doc: &mut MockDocument, classify: &mut dyn ClassifyPrompt) -> SaveOutcome {
        self.dispatch(
            doc,
            &SaveAsEvent::save(Vec::new()),
            classify,
            &mut CancellingDrawingPrompt::default(),
        )
    }

    /// Dispatch an arbitrary save event with explicit prompts.
    pub fn dispatch(
        &self,
        doc: &mut MockDocument,
        event: &SaveAsEvent,
        classify: &mut dyn ClassifyPrompt,
        drawing: &mut dyn DrawingPrompt,
    ) -> SaveOutcome {
        self.dispatcher
            .on_save_as(&self.project, doc, event, classify, drawing)
    }

    /// Lines of the scenario's error log, empty when nothing was logged.
    pub fn error_log_lines(&self) -> Vec<String> {
        fs::read_to_string(self.dispatcher.error_log().path())
            .map(|content| content.lines().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}
