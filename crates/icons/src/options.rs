use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

/// 图标工具类的配置
///
/// JSON 格式示例：
/// ```json
/// {
///   "baseDir": "deps/heroicons/optimized",
///   "prefix": "hero",
///   "spacing": { "6": "24px" },
///   "cacheCapacity": 256
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconOptions {
    /// 包含四个变体目录的根目录
    pub base_dir: PathBuf,
    /// 类名命名空间
    pub prefix: String,
    /// 主题 spacing 覆盖
    pub spacing: IndexMap<String, String>,
    /// 内容缓存最多保留的图标数
    pub cache_capacity: usize,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("deps/heroicons/optimized"),
            prefix: "hero".to_string(),
            spacing: IndexMap::new(),
            cache_capacity: 512,
        }
    }
}

impl IconOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_spacing(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.spacing.insert(key.into(), value.into());
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

/// 从 JSON 字符串加载配置，缺失的字段使用默认值
pub fn load_options_from_json(json_str: &str) -> Result<IconOptions> {
    Ok(serde_json::from_str(json_str)?)
}
