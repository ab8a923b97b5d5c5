pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "openapi-split")]
#[command(about = "Fetches an OpenAPI spec and splits it into per-entity YAML files")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "https://raw.githubusercontent.com/openai/openai-openapi/refs/heads/manual_spec/openapi.yaml"
    )]
    pub spec_url: String,

    #[arg(long, default_value = "openai-api-spec.yaml")]
    pub spec_file: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = "paths")]
    pub paths_dir: String,

    #[arg(long, default_value = "schemas")]
    pub schemas_dir: String,

    #[arg(long, default_value = "groups")]
    pub groups_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn spec_url(&self) -> &str {
        &self.spec_url
    }

    fn spec_file(&self) -> &str {
        &self.spec_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn paths_dir(&self) -> &str {
        &self.paths_dir
    }

    fn schemas_dir(&self) -> &str {
        &self.schemas_dir
    }

    fn groups_dir(&self) -> &str {
        &self.groups_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("spec_url", &self.spec_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("spec_file", &self.spec_file)?;
        validate_non_empty_string("paths_dir", &self.paths_dir)?;
        validate_non_empty_string("schemas_dir", &self.schemas_dir)?;
        validate_non_empty_string("groups_dir", &self.groups_dir)?;
        Ok(())
    }
}
