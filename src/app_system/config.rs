use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    /// Key the serialized cart is stored under.
    pub storage_key: String,
    /// Request queue depth of the cart actor.
    pub buffer_size: usize,
    /// JSON file backing the store; `None` keeps the cart in memory only.
    pub storage_path: Option<PathBuf>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            storage_path: None,
        }
    }
}

impl CartConfig {
    /// Reads `CART_STORAGE_KEY`, `CART_BUFFER_SIZE`, and `CART_STORAGE_PATH`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup("CART_STORAGE_KEY").filter(|k| !k.is_empty()) {
            config.storage_key = key;
        }
        if let Some(raw) = lookup("CART_BUFFER_SIZE") {
            config.buffer_size = raw
                .trim()
                .parse()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidValue { name: "CART_BUFFER_SIZE", value: raw })?;
        }
        if let Some(path) = lookup("CART_STORAGE_PATH").filter(|p| !p.is_empty()) {
            config.storage_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}
