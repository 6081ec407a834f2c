use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

const BASIC_PREFIX: &str = "Basic ";

/// The single record persisted by `setup`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredConfig {
    pub token: String,
}

/// Drops surrounding whitespace and a leading `Basic ` scheme, so a header
/// value copied from the browser can be pasted as-is.
pub fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(BASIC_PREFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Writes the token, replacing whatever record was there before.
pub fn save(path: &Path, raw_token: &str) -> Result<StoredConfig, ConfigError> {
    let config = StoredConfig {
        token: normalize_token(raw_token),
    };
    let data = serde_json::to_string(&config).map_err(ConfigError::Encode)?;
    fs::write(path, data)?;
    log::debug!("Wrote token to {}", path.display());
    Ok(config)
}

pub fn load(path: &Path) -> Result<StoredConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::Missing(path.to_path_buf()))
        }
        Err(err) => return Err(err.into()),
    };

    serde_json::from_str(&contents).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
