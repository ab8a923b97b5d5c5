pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::SplitEngine, fetcher::SpecFetcher};
pub use crate::domain::model::{RunSummary, SplitReport};
pub use crate::utils::error::{Result, SplitError};
