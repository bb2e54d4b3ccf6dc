//! Mock host and filesystem fixtures for exercising the save pipeline end
//! to end, without a CAD application.
//!
//! # Key Components
//!
//! - [`ProjectFixture`]: disposable on-disk project working trees
//! - [`mock`]: trait implementations standing in for the host application
//! - [`SaveScenario`]: fluent driver for whole save-as round trips

pub mod helpers;
pub mod mock;
pub mod workflow;

pub use helpers::ProjectFixture;
pub use mock::{
    AcceptingDrawingPrompt, CancellingDrawingPrompt, MockDocument, MockGeometry, MockProject,
    ScriptedPrompt,
};
pub use workflow::SaveScenario;
