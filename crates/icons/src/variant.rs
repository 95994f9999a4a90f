//! 图标变体与尺寸档位
//!
//! 四个变体固定不变：
//!
//! | 后缀 | 目录 | 尺寸 |
//! |------|------|------|
//! | (无) | `/24/outline` | spacing.6 |
//! | `-solid` | `/24/solid` | spacing.6 |
//! | `-mini` | `/20/solid` | spacing.5 |
//! | `-micro` | `/16/solid` | spacing.4 |

use std::path::{Path, PathBuf};

/// 图标变体：名字后缀 + 相对目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconVariant {
    pub suffix: &'static str,
    pub dir: &'static str,
}

impl IconVariant {
    /// 变体在 `base_dir` 下的实际目录
    pub fn path_in(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.dir.trim_start_matches('/'))
    }

    /// 文件名主干 + 后缀
    pub fn icon_name(&self, stem: &str) -> String {
        format!("{}{}", stem, self.suffix)
    }
}

pub const OUTLINE: IconVariant = IconVariant {
    suffix: "",
    dir: "/24/outline",
};

pub const SOLID: IconVariant = IconVariant {
    suffix: "-solid",
    dir: "/24/solid",
};

pub const MINI: IconVariant = IconVariant {
    suffix: "-mini",
    dir: "/20/solid",
};

pub const MICRO: IconVariant = IconVariant {
    suffix: "-micro",
    dir: "/16/solid",
};

pub const VARIANTS: [IconVariant; 4] = [OUTLINE, SOLID, MINI, MICRO];

/// 尺寸档位，只由名字后缀决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Default,
    Mini,
    Micro,
}

impl SizeTier {
    /// 按优先级匹配：`-mini` → `-micro` → 默认
    pub fn for_name(name: &str) -> Self {
        if name.ends_with(MINI.suffix) {
            SizeTier::Mini
        } else if name.ends_with(MICRO.suffix) {
            SizeTier::Micro
        } else {
            SizeTier::Default
        }
    }

    /// 对应的主题 spacing 键
    pub fn spacing_key(self) -> &'static str {
        match self {
            SizeTier::Default => "6",
            SizeTier::Mini => "5",
            SizeTier::Micro => "4",
        }
    }
}
