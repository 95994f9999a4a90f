use crate::types::Declaration;

/// 单个工具类生成失败
///
/// 只影响出错的那个名字，不会中断整个生成过程
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to generate utility '{name}': {message}")]
pub struct ProviderError {
    pub name: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// 工具类提供者接口
///
/// 宿主在内容扫描后，对每个带 `{namespace}-` 前缀的类名去掉前缀，
/// 再交给对应的 provider 解析。
pub trait UtilityProvider {
    /// 命名空间前缀（不含连字符），如 "hero"
    fn namespace(&self) -> &str;

    /// 所有可被解析的名字
    fn candidates(&self) -> Vec<&str>;

    /// 名字是否在候选集合内
    fn contains(&self, name: &str) -> bool {
        self.candidates().contains(&name)
    }

    /// 解析名字为 CSS 声明
    ///
    /// `Ok(None)` 表示“不是我的”，宿主会继续尝试其它 provider。
    fn resolve(&self, name: &str) -> Result<Option<Vec<Declaration>>, ProviderError>;
}
