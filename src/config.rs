//! 配置文件 (~/.config/flashdeck/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::storage::JsonFileStore;

/// 学习模式下保留的按键，不能用作新建卡片键
const RESERVED_KEYS: [char; 2] = ['q', ' '];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无法解析配置文件 '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("配置无效: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub keys: KeyConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 卡组文件路径，缺省时使用数据目录
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// 打开新建卡片表单的按键
    pub new_card: char,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self { new_card: 'n' }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flashdeck")
            .join("config.toml")
    }

    /// 读取配置；文件不存在时使用默认值
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.keys.new_card;
        if key.is_control() || RESERVED_KEYS.contains(&key.to_ascii_lowercase()) {
            return Err(ConfigError::ValidationError {
                message: format!("keys.new_card 不能使用 {:?}", key),
            });
        }
        Ok(())
    }

    pub fn data_file(&self) -> PathBuf {
        self.storage
            .data_file
            .clone()
            .unwrap_or_else(JsonFileStore::default_path)
    }
}
