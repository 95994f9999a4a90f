use indexmap::IndexMap;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// 一个已发现的图标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// 文件名主干 + 变体后缀（如 "arrow-left-solid"）
    pub name: String,
    /// 源 SVG 文件的路径
    pub full_path: PathBuf,
}

/// 图标名 → 图标
///
/// 每次构建重新生成，构建完成后只读
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    map: IndexMap<String, IconEntry>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入图标，重名直接报错
    pub fn insert(&mut self, entry: IconEntry) -> Result<()> {
        if let Some(existing) = self.map.get(&entry.name) {
            return Err(Error::NameCollision {
                name: entry.name,
                first: existing.full_path.clone(),
                second: entry.full_path,
            });
        }
        self.map.insert(entry.name.clone(), entry);
        Ok(())
    }

    /// 按名字排序，使迭代顺序与目录枚举顺序无关
    pub(crate) fn sort(&mut self) {
        self.map.sort_keys();
    }

    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// 所有图标名
    pub fn names(&self) -> Vec<&str> {
        self.map.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
