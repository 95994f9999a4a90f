//! 主题 spacing 值
//!
//! 默认值是 Tailwind 的 spacing 刻度，编译期生成；配置里的同名键会覆盖默认值。

use indexmap::IndexMap;
use phf::phf_map;

use crate::error::{Error, Result};

/// `theme("spacing.{key}")` → 长度
pub static DEFAULT_SPACING: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "0px",
    "px" => "1px",
    "0.5" => "0.125rem",
    "1" => "0.25rem",
    "1.5" => "0.375rem",
    "2" => "0.5rem",
    "2.5" => "0.625rem",
    "3" => "0.75rem",
    "3.5" => "0.875rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
    "11" => "2.75rem",
    "12" => "3rem",
    "14" => "3.5rem",
    "16" => "4rem",
    "20" => "5rem",
    "24" => "6rem",
    "28" => "7rem",
    "32" => "8rem",
    "36" => "9rem",
    "40" => "10rem",
    "44" => "11rem",
    "48" => "12rem",
    "52" => "13rem",
    "56" => "14rem",
    "60" => "15rem",
    "64" => "16rem",
    "72" => "18rem",
    "80" => "20rem",
    "96" => "24rem",
};

/// 当前构建使用的主题
#[derive(Debug, Clone, Default)]
pub struct Theme {
    spacing: IndexMap<String, String>,
}

impl Theme {
    pub fn new(spacing_overrides: IndexMap<String, String>) -> Self {
        Self {
            spacing: spacing_overrides,
        }
    }

    /// 查询 spacing 值，覆盖优先
    pub fn spacing(&self, key: &str) -> Result<String> {
        if let Some(v) = self.spacing.get(key) {
            return Ok(v.clone());
        }

        DEFAULT_SPACING
            .get(key)
            .map(|v| v.to_string())
            .ok_or_else(|| Error::MissingSpacing {
                key: key.to_string(),
            })
    }
}
