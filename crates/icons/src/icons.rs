use heromask_core::{Declaration, ProviderError, UtilityProvider};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

use crate::cache::ContentCache;
use crate::discover::discover;
use crate::embed::data_uri;
use crate::error::{Error, Result};
use crate::options::IconOptions;
use crate::registry::{IconEntry, IconRegistry};
use crate::theme::Theme;
use crate::variant::SizeTier;

/// Heroicons 工具类生成器
///
/// 构建分两步：`build` 扫描目录得到只读的注册表，之后才能 `resolve`。
/// 文件内容在 `resolve` 时按需读取，并经过 [`ContentCache`]。
#[derive(Debug)]
pub struct HeroIcons {
    options: IconOptions,
    registry: IconRegistry,
    theme: Theme,
    cache: ContentCache,
}

impl HeroIcons {
    /// 扫描图标目录
    pub fn build(options: IconOptions) -> Result<Self> {
        let cache = ContentCache::new(options.cache_capacity);
        Self::build_with_cache(options, cache)
    }

    fn build_with_cache(options: IconOptions, cache: ContentCache) -> Result<Self> {
        let registry = discover(&options.base_dir)?;
        let theme = Theme::new(options.spacing.clone());

        Ok(Self {
            options,
            registry,
            theme,
            cache,
        })
    }

    /// 增量重建：重新扫描目录，保留缓存
    ///
    /// 缓存按修改时间校验，未改动的图标不会重新读取；
    /// 已不在新注册表里的路径从缓存中移除。
    pub fn rebuild(self) -> Result<Self> {
        let Self { options, cache, .. } = self;
        let rebuilt = Self::build_with_cache(options, cache)?;

        let live: HashSet<&Path> = rebuilt
            .registry
            .iter()
            .map(|entry| entry.full_path.as_path())
            .collect();
        rebuilt.cache.retain(|path| live.contains(path));

        Ok(rebuilt)
    }

    pub fn registry(&self) -> &IconRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// 解析图标名（不含前缀）
    ///
    /// 名字不在注册表里返回 `Ok(None)`；文件读取失败返回错误，不会生成残缺的规则。
    pub fn resolve(&self, name: &str) -> Result<Option<Vec<Declaration>>> {
        let Some(entry) = self.registry.get(name) else {
            return Ok(None);
        };

        let icon = self.cache.load(&entry.full_path).map_err(|e| {
            warn!(icon = %entry.name, path = %entry.full_path.display(), "failed to read icon: {}", e);
            Error::read_icon(&entry.name, &entry.full_path, e)
        })?;

        let size = self.theme.spacing(SizeTier::for_name(&entry.name).spacing_key())?;
        debug!(icon = %entry.name, %size, "resolved icon");

        Ok(Some(self.declarations(entry, &icon.content, &size)))
    }

    /// 并行解析一组名字
    ///
    /// 注册表只读，各个名字之间互不依赖；返回顺序与输入一致。
    pub fn resolve_many<S>(&self, names: &[S]) -> Vec<(String, Result<Option<Vec<Declaration>>>)>
    where
        S: AsRef<str> + Sync,
    {
        names
            .par_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), self.resolve(name))
            })
            .collect()
    }

    /// 生成声明，顺序固定
    fn declarations(&self, entry: &IconEntry, content: &str, size: &str) -> Vec<Declaration> {
        let var_name = format!("--{}-{}", self.options.prefix, entry.name);
        let mask = format!("var({})", var_name);

        vec![
            Declaration::new(var_name, data_uri(content)),
            Declaration::new("-webkit-mask", mask.clone()),
            Declaration::new("mask", mask),
            Declaration::new("mask-repeat", "no-repeat"),
            Declaration::new("background-color", "currentColor"),
            Declaration::new("vertical-align", "middle"),
            Declaration::new("display", "inline-block"),
            Declaration::new("width", size),
            Declaration::new("height", size),
        ]
    }
}

impl UtilityProvider for HeroIcons {
    fn namespace(&self) -> &str {
        &self.options.prefix
    }

    fn candidates(&self) -> Vec<&str> {
        self.registry.names()
    }

    fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn resolve(&self, name: &str) -> std::result::Result<Option<Vec<Declaration>>, ProviderError> {
        HeroIcons::resolve(self, name).map_err(|e| ProviderError::new(name, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const CHECK: &str = "<svg fill=\"none\">\n  <path d=\"m4.5 12.75 6 6 9-13.5\"/>\n</svg>\n";

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for dir in ["24/outline", "24/solid", "20/solid", "16/solid"] {
            let dir = tmp.path().join(dir);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("check.svg"), CHECK).unwrap();
        }
        tmp
    }

    #[test]
    fn test_declarations_for_outline() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path())).unwrap();

        let decls = icons.resolve("check").unwrap().unwrap();
        assert_eq!(
            decls,
            vec![
                Declaration::new(
                    "--hero-check",
                    "url('data:image/svg+xml;utf8,<svg fill=\"none\">  <path d=\"m4.5 12.75 6 6 9-13.5\"/></svg>')"
                ),
                Declaration::new("-webkit-mask", "var(--hero-check)"),
                Declaration::new("mask", "var(--hero-check)"),
                Declaration::new("mask-repeat", "no-repeat"),
                Declaration::new("background-color", "currentColor"),
                Declaration::new("vertical-align", "middle"),
                Declaration::new("display", "inline-block"),
                Declaration::new("width", "1.5rem"),
                Declaration::new("height", "1.5rem"),
            ]
        );
    }

    #[test]
    fn test_custom_prefix_names_the_variable() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path()).with_prefix("icon")).unwrap();

        let decls = icons.resolve("check-mini").unwrap().unwrap();
        assert_eq!(decls[0].property, "--icon-check-mini");
        assert_eq!(decls[1].value, "var(--icon-check-mini)");
        assert_eq!(icons.namespace(), "icon");
    }

    #[test]
    fn test_spacing_override_changes_size() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path()).with_spacing("4", "15px")).unwrap();

        let decls = icons.resolve("check-micro").unwrap().unwrap();
        assert_eq!(decls[7], Declaration::new("width", "15px"));
        assert_eq!(decls[8], Declaration::new("height", "15px"));
    }

    #[test]
    fn test_miss() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path())).unwrap();
        assert!(icons.resolve("not-a-real-icon").unwrap().is_none());
    }

    #[test]
    fn test_vanished_file_is_a_named_error() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path())).unwrap();
        fs::remove_file(tmp.path().join("24/solid/check.svg")).unwrap();

        let err = icons.resolve("check-solid").unwrap_err();
        match err {
            Error::ReadIcon { name, path, .. } => {
                assert_eq!(name, "check-solid");
                assert_eq!(path, tmp.path().join("24/solid/check.svg"));
            }
            other => panic!("Expected ReadIcon, got {:?}", other),
        }

        // 其它图标不受影响
        assert!(icons.resolve("check").unwrap().is_some());
    }

    #[test]
    fn test_repeated_resolve_reads_once() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path())).unwrap();

        let first = icons.resolve("check").unwrap();
        let second = icons.resolve("check").unwrap();

        assert_eq!(first, second);
        assert_eq!(icons.cache().stats().misses, 1);
        assert_eq!(icons.cache().stats().hits, 1);
    }

    #[test]
    fn test_resolve_many_keeps_input_order() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path())).unwrap();

        let results = icons.resolve_many(&["check-micro", "nope", "check"]);
        let names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["check-micro", "nope", "check"]);

        assert_eq!(
            results[0].1.as_ref().unwrap().as_ref().unwrap()[7].value,
            "1rem"
        );
        assert!(results[1].1.as_ref().unwrap().is_none());
        assert_eq!(
            results[2].1.as_ref().unwrap().as_ref().unwrap()[7].value,
            "1.5rem"
        );
    }

    #[test]
    fn test_provider_error_names_icon() {
        let tmp = fixture();
        let icons = HeroIcons::build(IconOptions::new(tmp.path())).unwrap();
        fs::remove_file(tmp.path().join("16/solid/check.svg")).unwrap();

        let err = UtilityProvider::resolve(&icons, "check-micro").unwrap_err();
        assert_eq!(err.name, "check-micro");
        assert!(err.message.contains("16/solid/check.svg"));
    }
}
