use crate::core::{SpecDocument, SplitReport, Splitter, Storage};
use crate::utils::error::{Result, SplitError};
use async_trait::async_trait;
use serde_yaml::Value;
use std::collections::HashSet;

pub struct GroupSplitter<S: Storage> {
    storage: S,
    input: String,
    out_dir: String,
}

impl<S: Storage> GroupSplitter<S> {
    pub fn new(storage: S, input: impl Into<String>, out_dir: impl Into<String>) -> Self {
        Self {
            storage,
            input: input.into(),
            out_dir: out_dir.into(),
        }
    }

    fn require_sequence<'a>(&self, meta: &'a Value, key: &str) -> Result<&'a Vec<Value>> {
        let section = format!("x-oaiMeta/{}", key);
        let value = meta.get(key).ok_or_else(|| SplitError::MissingSection {
            section: section.clone(),
            file: self.input.clone(),
        })?;
        value
            .as_sequence()
            .ok_or_else(|| SplitError::MalformedSection {
                section,
                reason: "expected a sequence".to_string(),
            })
    }
}

#[async_trait]
impl<S: Storage> Splitter for GroupSplitter<S> {
    fn section(&self) -> &'static str {
        "groups"
    }

    async fn split(&self) -> Result<SplitReport> {
        let bytes = self.storage.read_file(&self.input).await?;
        let doc = SpecDocument::from_slice(&bytes)?;

        let meta = doc
            .section("x-oaiMeta")
            .ok_or_else(|| SplitError::MissingSection {
                section: "x-oaiMeta".to_string(),
                file: self.input.clone(),
            })?;
        let navigation_groups = self.require_sequence(meta, "navigationGroups")?;
        let groups = self.require_sequence(meta, "groups")?;

        self.storage.create_dir(&self.out_dir).await?;

        // 先為每個導航群組建立子目錄，沒有內容的群組也會有空目錄
        let mut nav_ids: HashSet<String> = HashSet::new();
        for nav_group in navigation_groups {
            let nav_id = nav_group
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| SplitError::MalformedSection {
                    section: "x-oaiMeta/navigationGroups".to_string(),
                    reason: "navigation group without a string 'id'".to_string(),
                })?;
            self.storage
                .create_dir(&format!("{}/{}", self.out_dir, nav_id))
                .await?;
            nav_ids.insert(nav_id.to_string());
        }

        let mut written = 0;
        let mut skipped = 0;
        for group in groups {
            let group_id = group
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| SplitError::MalformedSection {
                    section: "x-oaiMeta/groups".to_string(),
                    reason: "group without a string 'id'".to_string(),
                })?;

            match group.get("navigationGroup").and_then(Value::as_str) {
                None => {
                    tracing::warn!(
                        "Group '{}' has no 'navigationGroup' specified, skipping",
                        group_id
                    );
                    skipped += 1;
                }
                Some(nav_id) if !nav_ids.contains(nav_id) => {
                    tracing::warn!(
                        "Group '{}' references unknown navigation group '{}', skipping",
                        group_id,
                        nav_id
                    );
                    skipped += 1;
                }
                Some(nav_id) => {
                    // 群組整體寫出，保留 id 與 navigationGroup 欄位
                    let yaml = serde_yaml::to_string(group)?;
                    let output_file = format!("{}/{}/{}.yaml", self.out_dir, nav_id, group_id);
                    self.storage
                        .write_file(&output_file, yaml.as_bytes())
                        .await?;
                    tracing::info!("Saved group '{}' to {}", group_id, output_file);
                    written += 1;
                }
            }
        }

        Ok(SplitReport { written, skipped })
    }
}
