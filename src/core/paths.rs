use crate::core::{SpecDocument, SplitReport, Splitter, Storage};
use crate::utils::error::{Result, SplitError};
use async_trait::async_trait;
use serde_yaml::Mapping;
use std::collections::HashMap;

pub struct PathSplitter<S: Storage> {
    storage: S,
    input: String,
    out_dir: String,
}

impl<S: Storage> PathSplitter<S> {
    pub fn new(storage: S, input: impl Into<String>, out_dir: impl Into<String>) -> Self {
        Self {
            storage,
            input: input.into(),
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> Splitter for PathSplitter<S> {
    fn section(&self) -> &'static str {
        "paths"
    }

    async fn split(&self) -> Result<SplitReport> {
        let bytes = self.storage.read_file(&self.input).await?;
        let doc = SpecDocument::from_slice(&bytes)?;

        let paths = doc
            .section("paths")
            .ok_or_else(|| SplitError::MissingSection {
                section: "paths".to_string(),
                file: self.input.clone(),
            })?;
        let paths = paths
            .as_mapping()
            .ok_or_else(|| SplitError::MalformedSection {
                section: "paths".to_string(),
                reason: "expected a mapping".to_string(),
            })?;

        self.storage.create_dir(&self.out_dir).await?;

        let mut written = 0;
        let mut seen: HashMap<String, String> = HashMap::new();

        for (key, operations) in paths {
            let path = key.as_str().ok_or_else(|| SplitError::MalformedSection {
                section: "paths".to_string(),
                reason: "non-string path key".to_string(),
            })?;

            let stem = sanitized_file_stem(path);
            if let Some(previous) = seen.insert(stem.clone(), path.to_string()) {
                tracing::warn!(
                    "Paths '{}' and '{}' both map to {}.yaml, overwriting",
                    previous,
                    path,
                    stem
                );
            }

            // 輸出為單鍵映射，保留原始路徑作為鍵
            let mut entry = Mapping::new();
            entry.insert(key.clone(), operations.clone());
            let yaml = serde_yaml::to_string(&entry)?;

            let output_file = format!("{}/{}.yaml", self.out_dir, stem);
            self.storage
                .write_file(&output_file, yaml.as_bytes())
                .await?;
            tracing::info!("Saved path '{}' to {}", path, output_file);
            written += 1;
        }

        Ok(SplitReport {
            written,
            skipped: 0,
        })
    }
}

/// `/a/b` -> `a_b`: slashes become underscores, one leading underscore is
/// stripped.
fn sanitized_file_stem(path: &str) -> String {
    let flat = path.replace('/', "_");
    flat.strip_prefix('_').unwrap_or(&flat).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use serde_yaml::Value;
    use tempfile::TempDir;

    const SPEC: &str = "\
openapi: 3.0.0
paths:
  /a/b:
    get: {}
  /widgets:
    post:
      summary: Create a widget
";

    async fn storage_with_spec(spec: &str) -> (TempDir, LocalStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        storage
            .write_file("spec.yaml", spec.as_bytes())
            .await
            .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_sanitized_file_stem() {
        assert_eq!(sanitized_file_stem("/a/b"), "a_b");
        assert_eq!(sanitized_file_stem("/widgets"), "widgets");
        assert_eq!(sanitized_file_stem("no-slash"), "no-slash");
        assert_eq!(sanitized_file_stem("/a_b"), "a_b");
    }

    #[tokio::test]
    async fn test_one_file_per_path() {
        let (temp_dir, storage) = storage_with_spec(SPEC).await;
        let splitter = PathSplitter::new(storage, "spec.yaml", "paths");

        let report = splitter.split().await.unwrap();

        assert_eq!(report.written, 2);
        assert!(temp_dir.path().join("paths/a_b.yaml").exists());
        assert!(temp_dir.path().join("paths/widgets.yaml").exists());

        let count = std::fs::read_dir(temp_dir.path().join("paths"))
            .unwrap()
            .count();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_output_is_single_key_mapping() {
        let (temp_dir, storage) = storage_with_spec(SPEC).await;
        let splitter = PathSplitter::new(storage, "spec.yaml", "paths");
        splitter.split().await.unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("paths/a_b.yaml")).unwrap();
        let value: Value = serde_yaml::from_str(&content).unwrap();
        let mapping = value.as_mapping().unwrap();

        assert_eq!(mapping.len(), 1);
        assert!(value.get("/a/b").and_then(|ops| ops.get("get")).is_some());
    }

    #[tokio::test]
    async fn test_output_round_trips_original_entry() {
        let (temp_dir, storage) = storage_with_spec(SPEC).await;
        let splitter = PathSplitter::new(storage, "spec.yaml", "paths");
        splitter.split().await.unwrap();

        let original: Value = serde_yaml::from_str(SPEC).unwrap();
        let content =
            std::fs::read_to_string(temp_dir.path().join("paths/widgets.yaml")).unwrap();
        let reread: Value = serde_yaml::from_str(&content).unwrap();

        assert_eq!(
            reread.get("/widgets"),
            original.get("paths").and_then(|p| p.get("/widgets"))
        );
    }

    #[tokio::test]
    async fn test_missing_paths_section_is_reported() {
        let (temp_dir, storage) = storage_with_spec("openapi: 3.0.0\ninfo:\n  title: x\n").await;
        let splitter = PathSplitter::new(storage, "spec.yaml", "paths");

        let result = splitter.split().await;

        assert!(matches!(result, Err(SplitError::MissingSection { .. })));
        assert!(!temp_dir.path().join("paths").exists());
    }

    #[tokio::test]
    async fn test_empty_paths_still_creates_directory() {
        let (temp_dir, storage) = storage_with_spec("openapi: 3.0.0\npaths: {}\n").await;
        let splitter = PathSplitter::new(storage, "spec.yaml", "paths");

        let report = splitter.split().await.unwrap();

        assert_eq!(report.written, 0);
        assert!(temp_dir.path().join("paths").is_dir());
    }

    #[tokio::test]
    async fn test_colliding_names_overwrite_with_last_entry() {
        let spec = "\
paths:
  /a/b:
    get: {}
  /a_b:
    post: {}
";
        let (temp_dir, storage) = storage_with_spec(spec).await;
        let splitter = PathSplitter::new(storage, "spec.yaml", "paths");

        let report = splitter.split().await.unwrap();
        assert_eq!(report.written, 2);

        // 兩個路徑都寫到 a_b.yaml，後者覆蓋前者
        let count = std::fs::read_dir(temp_dir.path().join("paths"))
            .unwrap()
            .count();
        assert_eq!(count, 1);

        let content = std::fs::read_to_string(temp_dir.path().join("paths/a_b.yaml")).unwrap();
        let value: Value = serde_yaml::from_str(&content).unwrap();
        assert!(value.get("/a_b").is_some());
        assert!(value.get("/a/b").is_none());
    }
}
