use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use toml;

use crate::error::GuardError;

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct RestrictionsConfig {
    pub apply_to_admins: Option<bool>,
    pub block_group_subset: Option<bool>,
}

impl RestrictionsConfig {
    pub fn apply_to_admins_on(&self) -> bool {
        self.apply_to_admins.unwrap_or(true)
    }

    pub fn block_group_subset_on(&self) -> bool {
        self.block_group_subset.unwrap_or(false)
    }
}

pub fn default_restrictions_config() -> RestrictionsConfig {
    RestrictionsConfig {
        apply_to_admins: Some(true),
        block_group_subset: Some(false),
    }
}

pub fn config_to_toml(config: RestrictionsConfig) -> Result<String, GuardError> {
    Ok(toml::to_string(&config)?)
}

pub fn read_config(config_path: &PathBuf) -> Result<RestrictionsConfig, GuardError> {
    let contents = fs::read_to_string(config_path).map_err(|err| GuardError::ConfigurationError {
        message: err.to_string(),
    })?;
    match toml::from_str(&contents) {
        Ok(config) => Ok(config),
        Err(err) => Err(GuardError::ConfigurationError {
            message: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_take_defaults() {
        let config: RestrictionsConfig = toml::from_str("").unwrap();
        assert!(config.apply_to_admins_on());
        assert!(!config.block_group_subset_on());
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let config: RestrictionsConfig =
            toml::from_str("apply_to_admins = false\nblock_group_subset = true\n").unwrap();
        assert!(!config.apply_to_admins_on());
        assert!(config.block_group_subset_on());
    }

    #[test]
    fn test_default_config_prints_both_flags() {
        let rendered = config_to_toml(default_restrictions_config()).unwrap();
        assert!(rendered.contains("apply_to_admins = true"));
        assert!(rendered.contains("block_group_subset = false"));
    }
}
