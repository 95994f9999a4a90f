//! Heroicons 工具类
//!
//! 扫描 heroicons 的四个变体目录，把每个 SVG 变成一个 `hero-<name>` 工具类：
//! 内联为 data URI 的 mask，颜色跟随 `currentColor`，尺寸由名字后缀决定。
//!
//! ```no_run
//! use heromask_core::{extract_candidates, generate};
//! use heromask_icons::{HeroIcons, IconOptions};
//!
//! let icons = HeroIcons::build(IconOptions::new("deps/heroicons/optimized"))?;
//! let candidates = extract_candidates(r#"<span class="hero-x-mark-solid"></span>"#);
//! let result = generate(&candidates, &[&icons]);
//! assert_eq!(result.rules.len(), 1);
//! # Ok::<(), heromask_icons::Error>(())
//! ```

pub mod cache;
pub mod discover;
pub mod embed;
pub mod error;
pub mod icons;
pub mod options;
pub mod registry;
pub mod theme;
pub mod variant;

// Re-export main types
pub use cache::{CacheStats, ContentCache};
pub use discover::discover;
pub use error::{Error, Result};
pub use icons::HeroIcons;
pub use options::{load_options_from_json, IconOptions};
pub use registry::{IconEntry, IconRegistry};
pub use theme::Theme;
pub use variant::{IconVariant, SizeTier, VARIANTS};
