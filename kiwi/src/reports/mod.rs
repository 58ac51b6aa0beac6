//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod output;
mod sync;

pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
pub use sync::SyncReport;
