use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

/// Keys every up-to-date config file must carry.
const REQUIRED_KEYS: [&str; 5] = [
    "database",
    "utc_offset",
    "accrual_amount",
    "page_size",
    "separator_char",
];

/// Report which required keys are missing from the on-disk config file.
/// Returns an empty list when the file is complete (or absent → defaults apply).
pub fn missing_config_keys() -> AppResult<Vec<String>> {
    let path = Config::config_file();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in REQUIRED_KEYS {
            if !map.contains_key(Value::String(key.to_string())) {
                missing.push(key.to_string());
            }
        }
    } else {
        return Err(AppError::Config("config file is not a YAML mapping".into()));
    }

    Ok(missing)
}

/// Fill any missing keys with their defaults, rewriting the file.
///
/// Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn run_config_migration() -> AppResult<bool> {
    let path = Config::config_file();
    if !path.exists() {
        info("No config file found, nothing to migrate.");
        return Ok(false);
    }

    let missing = missing_config_keys()?;
    if missing.is_empty() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)?;
    let mut yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    if let (Some(map), Some(def_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for key in &missing {
            let k = Value::String(key.clone());
            if let Some(v) = def_map.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    let out = serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(&path, out)?;

    success(format!(
        "Config migrated: added missing key(s) {}",
        missing.join(", ")
    ));

    Ok(true)
}
