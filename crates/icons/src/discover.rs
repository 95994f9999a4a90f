use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::registry::{IconEntry, IconRegistry};
use crate::variant::{IconVariant, VARIANTS};

/// 图标源文件扩展名
const SVG_EXTENSION: &str = "svg";

/// 扫描四个变体目录，生成图标注册表
///
/// 只列目录、不读文件内容。任何一个变体目录缺失都是配置错误。
pub fn discover(base_dir: &Path) -> Result<IconRegistry> {
    discover_variants(base_dir, &VARIANTS)
}

/// 扫描指定的变体目录
pub fn discover_variants(base_dir: &Path, variants: &[IconVariant]) -> Result<IconRegistry> {
    let mut registry = IconRegistry::new();

    for variant in variants {
        let dir = variant.path_in(base_dir);
        if !dir.is_dir() {
            return Err(Error::MissingVariantDir { path: dir });
        }

        let entries = fs::read_dir(&dir).map_err(|e| Error::read_dir(&dir, e))?;
        let mut count = 0usize;

        for entry in entries {
            let entry = entry.map_err(|e| Error::read_dir(&dir, e))?;
            let path = entry.path();

            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(SVG_EXTENSION) {
                debug!(path = %path.display(), "skipping non-svg file");
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                debug!(path = %path.display(), "skipping file with non-utf8 name");
                continue;
            };

            registry.insert(IconEntry {
                name: variant.icon_name(stem),
                full_path: path.clone(),
            })?;
            count += 1;
        }

        debug!(dir = %dir.display(), count, "scanned icon variant");
    }

    registry.sort();
    info!(base_dir = %base_dir.display(), icons = registry.len(), "discovered icons");

    Ok(registry)
}
