pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod reader;
pub mod verbose;

pub use cli::Cli;
pub use config::{Config, FilterConfig};
pub use error::{Error, ExitCode, Result};
pub use filter::{FilterOptions, FilterStats, run_filter};
pub use matcher::{PatternError, SortedMatcher};
pub use reader::{RECORD_CAPACITY, RecordEnd, RecordReader};
pub use verbose::VerboseLogger;
