mod context;
mod format;
mod nil;
mod table;

pub use context::Specs;
pub use nil::Nilable;
pub use table::{SpecEntry, TableSummary};
