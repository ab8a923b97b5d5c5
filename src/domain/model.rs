use crate::utils::error::{Result, SplitError};
use serde_yaml::{Mapping, Value};

/// Opaque view over a fetched OpenAPI document. The top level must be a
/// mapping; key order is preserved by serde_yaml's Mapping.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    root: Mapping,
}

impl SpecDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_yaml::from_slice(bytes)?;
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err(SplitError::MalformedSection {
                section: "document root".to_string(),
                reason: "expected a mapping at the top level".to_string(),
            }),
        }
    }

    pub fn section(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }
}

/// Outcome of one splitter stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub written: usize,
    pub skipped: usize,
}

/// Outcome of a full run. A `None` stage means that stage failed and was
/// reported; the run itself still completed.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub spec_file: String,
    pub paths: Option<SplitReport>,
    pub schemas: Option<SplitReport>,
    pub groups: Option<SplitReport>,
}

impl RunSummary {
    pub fn total_written(&self) -> usize {
        [&self.paths, &self.schemas, &self.groups]
            .into_iter()
            .flatten()
            .map(|report| report.written)
            .sum()
    }

    pub fn all_succeeded(&self) -> bool {
        self.paths.is_some() && self.schemas.is_some() && self.groups.is_some()
    }
}
