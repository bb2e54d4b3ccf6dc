pub mod classify;
pub mod session;

pub use classify::{destination, Classification, StockInfo};
pub use session::{Field, SaveSession, SessionError, SessionState};
