//! Remove numbered directories within an inclusive range, with a dry-run
//! preview and an interactive confirmation before anything is deleted.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;
pub mod pruner;
pub mod selection;
pub mod utils;

pub use error::{ConfigError, PruneError};
pub use pruner::{prune, Phase, Preview, PruneOutcome, PruneReport, Pruner};
pub use selection::{Candidate, NumberRange, Selection};
