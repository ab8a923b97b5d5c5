pub mod engine;
pub mod fetcher;
pub mod groups;
pub mod paths;
pub mod schemas;

pub use crate::domain::model::{RunSummary, SpecDocument, SplitReport};
pub use crate::domain::ports::{ConfigProvider, Splitter, Storage};
pub use crate::utils::error::Result;
