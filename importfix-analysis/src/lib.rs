//! Analysis document ingestion.
//!
//! Keys importfix does not use are ignored. A document it cannot interpret is fatal; there is no
//! partial recovery.

mod load;

pub use load::{AnalysisLoadError, load_analysis, parse_analysis};
