pub mod dimensions;
pub mod project_key;
pub mod sequence;
pub mod validate;

pub use dimensions::{stock_dimensions, FlatPatternSource};
pub use project_key::{project_key, project_text};
pub use sequence::next_number;
pub use validate::is_valid_name;
