use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Separator between the location and the entity in a composite retailer name,
/// e.g. `"Westfield Mall - Luxe Apparel"`.
pub const NAME_SEPARATOR: &str = " - ";

/// The entity being benchmarked against its competitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retailer {
    pub id: String,
    /// Display name; often a `"location - entity"` composite.
    pub name: String,
    /// Explicit short name for the retailer's own row in a comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Retailer {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Name shown on the retailer's own comparison row.
    ///
    /// Uses `display_name` when set. Otherwise takes the second component of a
    /// `"location - entity"` composite name, falling back to the whole name
    /// when there is no separator. Blank candidates count as absent.
    #[must_use]
    pub fn primary_display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| {
                self.name
                    .split(NAME_SEPARATOR)
                    .nth(1)
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
            })
            .unwrap_or(self.name.as_str())
    }
}

/// A retailer entry in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailerConfig {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    /// Number of competitors tracked for this retailer; shown on the admin panel.
    #[serde(default)]
    pub tracked_competitors: u32,
}

impl RetailerConfig {
    #[must_use]
    pub fn to_retailer(&self) -> Retailer {
        Retailer {
            id: self.id.clone(),
            name: self.name.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RetailersFile {
    pub retailers: Vec<RetailerConfig>,
}

impl RetailersFile {
    /// Look up a retailer by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&RetailerConfig> {
        self.retailers.iter().find(|r| r.id == id)
    }
}

/// Load and validate the retailer catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_retailers(path: &Path) -> Result<RetailersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RetailersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_retailers(&content)
}

/// Parse and validate a retailer catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_retailers(content: &str) -> Result<RetailersFile, ConfigError> {
    let retailers_file: RetailersFile =
        serde_yaml::from_str(content).map_err(ConfigError::RetailersFileParse)?;

    validate_retailers(&retailers_file)?;

    Ok(retailers_file)
}

fn validate_retailers(retailers_file: &RetailersFile) -> Result<(), ConfigError> {
    if retailers_file.retailers.is_empty() {
        return Err(ConfigError::Validation(
            "retailer catalog must list at least one retailer".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for retailer in &retailers_file.retailers {
        if retailer.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "retailer '{}' has an empty id",
                retailer.name
            )));
        }

        if retailer.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "retailer name must be non-empty".to_string(),
            ));
        }

        if retailer
            .display_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "retailer '{}' has a blank display_name",
                retailer.id
            )));
        }

        if !seen_ids.insert(retailer.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate retailer id: '{}'",
                retailer.id
            )));
        }

        if !seen_names.insert(retailer.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate retailer name: '{}'",
                retailer.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "retailers_test.rs"]
mod tests;
