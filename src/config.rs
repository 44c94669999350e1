use crate::error::DictionaryResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dictionary ID of the NEO dictionary, also the GOLR host it is served from
pub const NEO_DICT_ID: &str = "http://golr-aux.geneontology.io";

/// Solr path selecting all bioentity documents (`q=*:*`)
pub const SOLR_BIOENTITY_URL_PART: &str =
    "/solr/select?fq=document_category:bioentity&q=%2A%3A%2A";

/// NEO dictionary adapter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeoConfig {
    /// Base search URL, used for both operations unless overridden
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search URL used by `get_entries`
    #[serde(default)]
    pub url_get_entries: Option<String>,

    /// Search URL used by `get_entry_matches_for_string`
    #[serde(default)]
    pub url_get_matches: Option<String>,

    /// Page size used when the caller gives none (or an invalid one)
    #[serde(default = "default_per_page")]
    pub per_page_default: u32,

    /// Largest page size the backend is asked for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Optimized mapping for curators: rich `descr` strings
    #[serde(default = "default_true")]
    pub optimap: bool,

    /// Log every request URL
    #[serde(default)]
    pub log: bool,

    /// Solr response writer (`wt` parameter)
    #[serde(default = "default_format")]
    pub format: String,
}

impl NeoConfig {
    /// Load configuration from the embedded defaults, an optional file and
    /// the environment
    pub fn load(path: Option<&Path>) -> DictionaryResult<Self> {
        let mut builder = config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ));

        // Explicit path wins over NEO_CONFIG_PATH
        let env_path = std::env::var("NEO_CONFIG_PATH").ok();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        } else if let Some(env_path) = env_path {
            builder = builder.add_source(config::File::with_name(&env_path).required(false));
        }

        let config = builder
            // Override with environment variables (prefix: NEO_DICT_)
            .add_source(
                config::Environment::with_prefix("NEO_DICT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// URL the entry search is appended to
    pub fn entries_url(&self) -> &str {
        self.url_get_entries.as_deref().unwrap_or(&self.base_url)
    }

    /// URL the string-match search is appended to
    pub fn matches_url(&self) -> &str {
        self.url_get_matches.as_deref().unwrap_or(&self.base_url)
    }
}

impl Default for NeoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            url_get_entries: None,
            url_get_matches: None,
            per_page_default: default_per_page(),
            max_page_size: default_max_page_size(),
            optimap: true,
            log: false,
            format: default_format(),
        }
    }
}

fn default_base_url() -> String {
    format!("{}{}", NEO_DICT_ID, SOLR_BIOENTITY_URL_PART)
}

fn default_per_page() -> u32 {
    50
}

fn default_max_page_size() -> u32 {
    100
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "json".to_string()
}

/// Builder for NeoConfig
pub struct NeoConfigBuilder {
    config: NeoConfig,
}

impl NeoConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: NeoConfig::default(),
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn url_get_entries(mut self, url: impl Into<String>) -> Self {
        self.config.url_get_entries = Some(url.into());
        self
    }

    pub fn url_get_matches(mut self, url: impl Into<String>) -> Self {
        self.config.url_get_matches = Some(url.into());
        self
    }

    pub fn per_page_default(mut self, size: u32) -> Self {
        self.config.per_page_default = size;
        self
    }

    pub fn max_page_size(mut self, size: u32) -> Self {
        self.config.max_page_size = size;
        self
    }

    pub fn optimap(mut self, enabled: bool) -> Self {
        self.config.optimap = enabled;
        self
    }

    pub fn log(mut self, enabled: bool) -> Self {
        self.config.log = enabled;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    pub fn build(self) -> NeoConfig {
        self.config
    }
}

impl Default for NeoConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
