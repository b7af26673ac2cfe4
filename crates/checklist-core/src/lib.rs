pub mod bootstrap;
pub mod checklist;
pub mod ensure;
pub mod error;
pub mod io;
pub mod locate;
pub mod paths;
pub mod predicate;
pub mod readme;

pub use checklist::Checklist;
pub use ensure::{ensure_checklist, EnsureOptions, EnsureOutcome};
pub use error::{ChecklistError, Result};
