use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Card;

/// 存档文件名（固定的存储键）
pub const STORAGE_KEY: &str = "flashcards_v1.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("无法写入卡组文件 '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("卡组序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 卡组持久化接口
pub trait Store {
    /// 读取上次保存的卡组；不存在或数据损坏时返回 `None`
    fn load(&self) -> Option<Vec<Card>>;

    /// 保存完整卡组，覆盖旧数据
    fn save(&mut self, cards: &[Card]) -> Result<(), StoreError>;
}

/// 以 JSON 文件保存卡组
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 数据目录下的默认存档 (~/.local/share/flashdeck/flashcards_v1.json)
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flashdeck")
            .join(STORAGE_KEY)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Option<Vec<Card>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved deck");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read saved deck");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Card>>(&content) {
            Ok(cards) => Some(cards),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "saved deck is corrupt, ignoring");
                None
            }
        }
    }

    fn save(&mut self, cards: &[Card]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string(cards)?;
        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), cards = cards.len(), "deck saved");
        Ok(())
    }
}
