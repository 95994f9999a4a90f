use indexmap::IndexMap;
use parking_lot::Mutex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::debug;

use crate::embed::strip_line_breaks;

/// 一个已读取并去掉换行的图标
#[derive(Debug, Clone)]
pub struct CachedIcon {
    pub modified: Option<SystemTime>,
    pub digest: blake3::Hash,
    pub content: Arc<str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: IndexMap<PathBuf, CachedIcon>,
    hits: u64,
    misses: u64,
}

/// 图标内容缓存
///
/// 以路径为键，修改时间不变才算命中。超过容量时淘汰最早写入的条目。
/// 可以跨增量构建保留。
#[derive(Debug)]
pub struct ContentCache {
    state: Mutex<CacheState>,
    capacity: usize,
}

impl ContentCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            capacity,
        }
    }

    /// 读取图标内容，优先使用缓存
    pub fn load(&self, path: &Path) -> io::Result<CachedIcon> {
        let modified = fs::metadata(path)?.modified().ok();

        {
            let mut guard = self.state.lock();
            let state = &mut *guard;
            let fresh = state
                .entries
                .get(path)
                .filter(|cached| modified.is_some() && cached.modified == modified)
                .cloned();
            if let Some(hit) = fresh {
                state.hits += 1;
                return Ok(hit);
            }
        }

        // 读文件时不持锁
        let raw = fs::read_to_string(path)?;
        let content: Arc<str> = strip_line_breaks(&raw).into();
        let icon = CachedIcon {
            modified,
            digest: blake3::hash(content.as_bytes()),
            content,
        };

        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.misses += 1;

        if let Some(previous) = state.entries.shift_remove(path) {
            if previous.digest == icon.digest {
                debug!(path = %path.display(), "icon touched but content unchanged");
            } else {
                debug!(path = %path.display(), "icon content changed, reloaded");
            }
        }

        if self.capacity > 0 {
            state.entries.insert(path.to_path_buf(), icon.clone());
            while state.entries.len() > self.capacity {
                if let Some((evicted, _)) = state.entries.shift_remove_index(0) {
                    debug!(path = %evicted.display(), "evicted icon from cache");
                }
            }
        }

        Ok(icon)
    }

    /// 只保留满足条件的路径
    pub fn retain(&self, mut keep: impl FnMut(&Path) -> bool) {
        self.state.lock().entries.retain(|path, _| keep(path.as_path()));
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            len: state.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_with_mtime(path: &Path, content: &str, secs: u64) {
        fs::write(path, content).unwrap();
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    #[test]
    fn test_load_strips_line_breaks() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("check.svg");
        write_with_mtime(&path, "<svg>\n<path/>\r\n</svg>\n", 1_000);

        let cache = ContentCache::new(4);
        let icon = cache.load(&path).unwrap();
        assert_eq!(&*icon.content, "<svg><path/></svg>");
    }

    #[test]
    fn test_second_load_is_a_hit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("check.svg");
        write_with_mtime(&path, "<svg/>", 1_000);

        let cache = ContentCache::new(4);
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert_eq!(first.content, second.content);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                len: 1
            }
        );
    }

    #[test]
    fn test_mtime_change_invalidates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("check.svg");
        write_with_mtime(&path, "<svg>old</svg>", 1_000);

        let cache = ContentCache::new(4);
        let old = cache.load(&path).unwrap();

        write_with_mtime(&path, "<svg>new</svg>", 2_000);
        let new = cache.load(&path).unwrap();

        assert_eq!(&*new.content, "<svg>new</svg>");
        assert_ne!(old.digest, new.digest);
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().len, 1);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let tmp = TempDir::new().unwrap();
        let cache = ContentCache::new(2);

        for (i, name) in ["a.svg", "b.svg", "c.svg"].iter().enumerate() {
            let path = tmp.path().join(name);
            write_with_mtime(&path, "<svg/>", 1_000 + i as u64);
            cache.load(&path).unwrap();
        }
        assert_eq!(cache.stats().len, 2);

        // a 已被淘汰，再读一次是 miss
        cache.load(&tmp.path().join("a.svg")).unwrap();
        assert_eq!(cache.stats().hits, 0);

        // c 仍在缓存中
        cache.load(&tmp.path().join("c.svg")).unwrap();
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_zero_capacity_never_stores() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("check.svg");
        write_with_mtime(&path, "<svg/>", 1_000);

        let cache = ContentCache::new(0);
        cache.load(&path).unwrap();
        cache.load(&path).unwrap();
        assert_eq!(cache.stats().len, 0);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_missing_file() {
        let cache = ContentCache::new(4);
        let err = cache.load(Path::new("/definitely/not/here.svg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_retain() {
        let tmp = TempDir::new().unwrap();
        let keep = tmp.path().join("keep.svg");
        let drop = tmp.path().join("drop.svg");
        write_with_mtime(&keep, "<svg/>", 1_000);
        write_with_mtime(&drop, "<svg/>", 1_000);

        let cache = ContentCache::new(4);
        cache.load(&keep).unwrap();
        cache.load(&drop).unwrap();

        cache.retain(|path| path == keep.as_path());
        assert_eq!(cache.stats().len, 1);
    }
}
