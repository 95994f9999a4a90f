//! 图标生成的错误类型

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 缺少必需的变体目录（配置错误，直接终止构建）
    #[error("icon variant directory '{path}' does not exist")]
    MissingVariantDir { path: PathBuf },

    #[error("failed to list icon directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 两个源文件映射到同一个名字
    #[error("icon name '{name}' is produced by both '{first}' and '{second}'")]
    NameCollision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to read icon '{name}' from '{path}': {source}")]
    ReadIcon {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme has no spacing value for '{key}'")]
    MissingSpacing { key: String },

    #[error("invalid icon options: {0}")]
    Options(#[from] serde_json::Error),
}

impl Error {
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn read_icon(name: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadIcon {
            name: name.into(),
            path: path.into(),
            source,
        }
    }
}
