use heromask_core::UtilityRule;

/// 将单条规则生成为 CSS 字符串
///
/// # 参数
///
/// - `rule`: 生成的规则
/// - `indent`: 缩进字符串（默认为 "  "）
pub fn emit_rule(rule: &UtilityRule, indent: &str) -> String {
    let mut css = String::new();

    if rule.declarations.is_empty() {
        return css;
    }

    css.push_str(&format!(".{} {{\n", escape_class(&rule.class)));
    for decl in &rule.declarations {
        css.push_str(&format!("{}{}: {};\n", indent, decl.property, decl.value));
    }
    css.push_str("}\n");

    css
}

/// 按顺序拼接多条规则
pub fn emit_stylesheet(rules: &[UtilityRule], indent: &str) -> String {
    rules
        .iter()
        .map(|rule| emit_rule(rule, indent))
        .filter(|css| !css.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 类选择器转义
///
/// `[A-Za-z0-9_-]` 之外的字符加反斜杠；开头的数字用十六进制转义
pub fn escape_class(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());

    for (i, c) in name.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }

    escaped
}
