use crate::core::{SpecDocument, SplitReport, Splitter, Storage};
use crate::utils::error::{Result, SplitError};
use async_trait::async_trait;
use serde_yaml::Mapping;

pub struct SchemaSplitter<S: Storage> {
    storage: S,
    input: String,
    out_dir: String,
}

impl<S: Storage> SchemaSplitter<S> {
    pub fn new(storage: S, input: impl Into<String>, out_dir: impl Into<String>) -> Self {
        Self {
            storage,
            input: input.into(),
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> Splitter for SchemaSplitter<S> {
    fn section(&self) -> &'static str {
        "schemas"
    }

    async fn split(&self) -> Result<SplitReport> {
        let bytes = self.storage.read_file(&self.input).await?;
        let doc = SpecDocument::from_slice(&bytes)?;

        let schemas = doc
            .section("components")
            .and_then(|components| components.get("schemas"))
            .ok_or_else(|| SplitError::MissingSection {
                section: "components/schemas".to_string(),
                file: self.input.clone(),
            })?;
        let schemas = schemas
            .as_mapping()
            .ok_or_else(|| SplitError::MalformedSection {
                section: "components/schemas".to_string(),
                reason: "expected a mapping".to_string(),
            })?;

        self.storage.create_dir(&self.out_dir).await?;

        let mut written = 0;
        for (key, schema) in schemas {
            let name = key.as_str().ok_or_else(|| SplitError::MalformedSection {
                section: "components/schemas".to_string(),
                reason: "non-string schema name".to_string(),
            })?;

            let mut entry = Mapping::new();
            entry.insert(key.clone(), schema.clone());
            let yaml = serde_yaml::to_string(&entry)?;

            let output_file = format!("{}/{}.yaml", self.out_dir, name);
            self.storage
                .write_file(&output_file, yaml.as_bytes())
                .await?;
            tracing::info!("Saved schema '{}' to {}", name, output_file);
            written += 1;
        }

        Ok(SplitReport {
            written,
            skipped: 0,
        })
    }
}
