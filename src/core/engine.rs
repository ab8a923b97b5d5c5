use crate::core::fetcher::SpecFetcher;
use crate::core::groups::GroupSplitter;
use crate::core::paths::PathSplitter;
use crate::core::schemas::SchemaSplitter;
use crate::core::{ConfigProvider, RunSummary, SplitReport, Splitter, Storage};
use crate::utils::error::Result;

pub struct SplitEngine<S: Storage + Clone, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: SpecFetcher,
}

impl<S: Storage + Clone, C: ConfigProvider> SplitEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            fetcher: SpecFetcher::new(),
        }
    }

    /// Fetch the document, then run the three splitters in sequence. A fetch
    /// failure propagates and skips every splitter; a splitter failure is
    /// reported and the remaining splitters still run.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Fetching OpenAPI document from {}", self.config.spec_url());
        let size = self
            .fetcher
            .fetch(self.config.spec_url(), self.config.spec_file(), &self.storage)
            .await?;
        tracing::info!("Fetched {} bytes into {}", size, self.config.spec_file());

        let paths = self
            .run_stage(&PathSplitter::new(
                self.storage.clone(),
                self.config.spec_file(),
                self.config.paths_dir(),
            ))
            .await;
        let schemas = self
            .run_stage(&SchemaSplitter::new(
                self.storage.clone(),
                self.config.spec_file(),
                self.config.schemas_dir(),
            ))
            .await;
        let groups = self
            .run_stage(&GroupSplitter::new(
                self.storage.clone(),
                self.config.spec_file(),
                self.config.groups_dir(),
            ))
            .await;

        Ok(RunSummary {
            spec_file: self.config.spec_file().to_string(),
            paths,
            schemas,
            groups,
        })
    }

    async fn run_stage<T: Splitter>(&self, splitter: &T) -> Option<SplitReport> {
        tracing::info!("--- Splitting {} ---", splitter.section());
        match splitter.split().await {
            Ok(report) => {
                tracing::info!(
                    "{}: {} file(s) written, {} skipped",
                    splitter.section(),
                    report.written,
                    report.skipped
                );
                Some(report)
            }
            Err(e) => {
                tracing::error!("{} splitting failed: {}", splitter.section(), e);
                None
            }
        }
    }
}
