//! Configuration loading and management
//!
//! ```yaml
//! list:
//!   page_sizes: [5, 10, 25, 50]
//!   default_page_size: 5
//!   search_fields: [name, description]
//!   default_sort: name:asc
//! logging:
//!   filter: catalog=debug,info
//! ```

use crate::core::Entity;
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::query::SortSpec;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Settings for one list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// Page sizes offered to the user
    pub page_sizes: Vec<usize>,

    /// Page size used until the user picks another
    pub default_page_size: usize,

    /// Fields the search term is matched against
    pub search_fields: Vec<String>,

    /// Initial sort (`field`, `field:asc` or `field:desc`); unsorted when absent
    pub default_sort: Option<String>,

    /// Buffer size of the list event channel
    pub event_capacity: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_sizes: vec![5, 10, 25, 50],
            default_page_size: 5,
            search_fields: vec!["name".to_string(), "description".to_string()],
            default_sort: None,
            event_capacity: 256,
        }
    }
}

impl ListSettings {
    /// Defaults with the entity's own searchable fields
    pub fn for_entity<T: Entity>() -> Self {
        Self {
            search_fields: T::searchable_fields().iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Parsed initial sort
    pub fn sort_spec(&self) -> CatalogResult<SortSpec> {
        match &self.default_sort {
            Some(raw) => raw.parse().map_err(CatalogError::Config),
            None => Ok(SortSpec::unsorted()),
        }
    }

    /// Check the settings are usable
    pub fn validate(&self) -> CatalogResult<()> {
        if self.page_sizes.is_empty() {
            return Err(CatalogError::Config(
                "list.page_sizes must not be empty".to_string(),
            ));
        }
        if self.page_sizes.contains(&0) || self.default_page_size == 0 {
            return Err(CatalogError::Config(
                "page sizes must be positive".to_string(),
            ));
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(CatalogError::Config(format!(
                "default_page_size {} is not one of {:?}",
                self.default_page_size, self.page_sizes
            )));
        }
        self.sort_spec()?;
        Ok(())
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Install a global `tracing` subscriber.
    ///
    /// Returns `false` if a subscriber was already installed.
    pub fn init(&self) -> bool {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.filter));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok()
    }
}

/// Complete configuration for the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub list: ListSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CatalogConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("cannot read {}: {}", path, e)))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.list.validate()?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self::default()
    }
}
