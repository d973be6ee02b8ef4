pub mod analysis;
pub mod args;
pub mod error;
pub mod extract;
pub mod rank;
pub mod report;
pub mod source;
pub mod stats;
pub mod tally;
pub mod utils;

pub use analysis::{analyse, analyse_file, record_line, LogTallies};
pub use args::Args;
pub use error::AnalysisError;
pub use extract::FieldExtractor;
pub use rank::{top_three, RankedEntry, Ranking};
pub use report::{render, write_report};
pub use source::{check_accessible, open_log, LineSource, ReaderSource};
pub use stats::LogResults;
pub use tally::FrequencyTally;
