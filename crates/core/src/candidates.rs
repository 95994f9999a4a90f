use std::collections::BTreeSet;

/// 规范化类名列表
///
/// 功能：
/// 1. 合并所有输入，按空格拆分
/// 2. 去除空字符串
/// 3. 去重
/// 4. 排序（字典序，保证确定性）
pub fn normalize_classes(classes: &[String]) -> Vec<String> {
    let mut unique_classes = BTreeSet::new();

    for class_str in classes {
        for token in class_str.split_whitespace() {
            unique_classes.insert(token.to_string());
        }
    }

    unique_classes.into_iter().collect()
}

/// 从任意源码/模板文本中提取候选类名
///
/// 不理解任何模板语法：把类名字符之外的所有字符都当作分隔符，
/// 所以 `class="hero-x-mark"` 和 `name="hero-x-mark"` 都能命中。
/// 结果去重并排序，与扫描顺序无关。
pub fn extract_candidates(source: &str) -> Vec<String> {
    let mut unique = BTreeSet::new();

    for token in source.split(|c: char| !is_class_char(c)) {
        // 句末的标点不属于类名
        let token = token.trim_end_matches(['.', ':', '/']);
        if token.is_empty() || !token.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '-')
        {
            continue;
        }
        unique.insert(token.to_string());
    }

    unique.into_iter().collect()
}

fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '/' | '.')
}
