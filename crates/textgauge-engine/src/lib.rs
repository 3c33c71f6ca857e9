// Engine crate - pure text computation (statistics, summarization)
// Everything here is a total function of its input: no I/O, no shared state

pub mod analysis;
pub mod summary;

pub use analysis::{TextReport, analyze};
pub use summary::{DEFAULT_MAX_CHARS, summarize};
