use crate::domain::model::SplitReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn create_dir(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn spec_url(&self) -> &str;
    fn spec_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn paths_dir(&self) -> &str;
    fn schemas_dir(&self) -> &str;
    fn groups_dir(&self) -> &str;
}

#[async_trait]
pub trait Splitter: Send + Sync {
    /// Document section this splitter consumes, used in logs and reports.
    fn section(&self) -> &'static str;

    async fn split(&self) -> Result<SplitReport>;
}
