//! SVG 内联为 data URI
//!
//! 不做百分号编码：只去掉换行，再用单引号包进 `url(...)`。
//! SVG 属性值用双引号，所以外层必须是单引号。

const DATA_URI_PREFIX: &str = "url('data:image/svg+xml;utf8,";
const DATA_URI_SUFFIX: &str = "')";

/// 去掉所有 `\r` 和 `\n`，其它字节原样保留
pub fn strip_line_breaks(content: &str) -> String {
    content.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// 生成 `url('data:image/svg+xml;utf8,<content>')`
///
/// `content` 应该已经去掉换行
pub fn data_uri(content: &str) -> String {
    format!("{}{}{}", DATA_URI_PREFIX, content, DATA_URI_SUFFIX)
}

/// `data_uri` 的逆操作，取回内联的 SVG
pub fn data_uri_payload(value: &str) -> Option<&str> {
    value
        .strip_prefix(DATA_URI_PREFIX)?
        .strip_suffix(DATA_URI_SUFFIX)
}
