use crate::core::Storage;
use crate::utils::error::Result;
use reqwest::Client;

/// Downloads the spec document and persists it verbatim through storage.
/// Nothing is written unless the full body arrived with a success status.
pub struct SpecFetcher {
    client: Client,
}

impl SpecFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch<S: Storage>(&self, url: &str, dest: &str, storage: &S) -> Result<usize> {
        tracing::debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Response status: {}", response.status());
        let response = response.error_for_status()?;

        let body = response.bytes().await?;
        storage.write_file(dest, &body).await?;

        tracing::info!("Content fetched from {} and saved to {}", url, dest);
        Ok(body.len())
    }
}

impl Default for SpecFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_writes_body_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let server = MockServer::start();
        let body = "openapi: 3.0.0\npaths: {}\n";
        let spec_mock = server.mock(|when, then| {
            when.method(GET).path("/openapi.yaml");
            then.status(200)
                .header("Content-Type", "application/yaml")
                .body(body);
        });

        let fetcher = SpecFetcher::new();
        let size = fetcher
            .fetch(&server.url("/openapi.yaml"), "spec.yaml", &storage)
            .await
            .unwrap();

        spec_mock.assert();
        assert_eq!(size, body.len());

        let saved = std::fs::read(temp_dir.path().join("spec.yaml")).unwrap();
        assert_eq!(saved, body.as_bytes());
    }

    #[tokio::test]
    async fn test_fetch_failure_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let server = MockServer::start();
        let spec_mock = server.mock(|when, then| {
            when.method(GET).path("/openapi.yaml");
            then.status(500);
        });

        let fetcher = SpecFetcher::new();
        let result = fetcher
            .fetch(&server.url("/openapi.yaml"), "spec.yaml", &storage)
            .await;

        spec_mock.assert();
        assert!(result.is_err());
        assert!(!temp_dir.path().join("spec.yaml").exists());
    }
}
