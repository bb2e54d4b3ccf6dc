//! The seam between the numbering engine and the host CAD application.
//!
//! The host is consumed exclusively through the traits in [`host`]; the
//! [`dispatch`] module routes the host's save-as events through the
//! classification session and reports a handled/not-handled outcome back.

pub mod dispatch;
pub mod drawing;
pub mod error_log;
pub mod host;
pub mod logging;
pub mod stock;

pub use dispatch::{DispatchConfig, DispatchError, SaveAsEvent, SaveDispatcher, SaveOutcome};
pub use drawing::{
    documentation_dir, drawing_file_stem, drawing_part_number, pdf_filter_index, DrawingSavePlan,
};
pub use error_log::{ErrorEntry, ErrorLog};
pub use host::{
    ClassifyPrompt, DocumentInfo, DrawingPrompt, HostDocument, HostError, HostProject,
    PartGeometry,
};
pub use stock::{part_stock_dimensions, recalc_session_stock, refresh_stock};
