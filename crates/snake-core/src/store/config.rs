use std::path::PathBuf;

/// Default directory for profile files, relative to the working directory
pub const DEFAULT_BASE_DIR: &str = "Players";
/// Default file extension for profile files
pub const DEFAULT_EXTENSION: &str = "json";

/// Where and how profiles are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one file per player
    pub base_dir: PathBuf,
    /// File extension, without the leading dot
    pub extension: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a new configuration builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

/// Builder for StoreConfig
#[derive(Debug, Clone, Default)]
pub struct StoreConfigBuilder {
    base_dir: Option<PathBuf>,
    extension: Option<String>,
}

impl StoreConfigBuilder {
    /// Set the profile directory
    pub fn base_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.base_dir = Some(path.into());
        self
    }

    /// Set the file extension; a leading dot is dropped
    pub fn extension<S: Into<String>>(mut self, extension: S) -> Self {
        let extension = extension.into();
        self.extension = Some(extension.trim_start_matches('.').to_string());
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        let default = StoreConfig::default();
        StoreConfig {
            base_dir: self.base_dir.unwrap_or(default.base_dir),
            extension: self.extension.unwrap_or(default.extension),
        }
    }
}
