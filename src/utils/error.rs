use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("'{section}' section not found in {file}")]
    MissingSection { section: String, file: String },

    #[error("Malformed '{section}' section: {reason}")]
    MalformedSection { section: String, reason: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SplitError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SplitError::HttpError(e) => format!("Failed to fetch the OpenAPI document: {}", e),
            SplitError::IoError(e) => format!("File operation failed: {}", e),
            SplitError::YamlError(e) => format!("The document is not valid YAML: {}", e),
            SplitError::MissingSection { section, file } => {
                format!("'{}' section not found in {}", section, file)
            }
            SplitError::MalformedSection { section, reason } => {
                format!("Section '{}' has an unexpected shape: {}", section, reason)
            }
            SplitError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SplitError::HttpError(_) => "Check the URL and your network connection, then rerun",
            SplitError::IoError(_) => {
                "Check filesystem permissions and free space under the output path"
            }
            SplitError::YamlError(_) => "Verify the source document is valid YAML",
            SplitError::MissingSection { .. } => {
                "Confirm the document is a complete OpenAPI specification"
            }
            SplitError::MalformedSection { .. } => {
                "Confirm the document follows the expected OpenAPI layout"
            }
            SplitError::InvalidConfigValueError { .. } => {
                "Adjust the command line arguments and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
