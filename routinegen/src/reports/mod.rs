//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`] target.

mod generate;
mod list;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use list::ListReport;
pub use output::{Output, Report, Stream, TerminalOutput};
