use crate::candidates::normalize_classes;
use crate::provider::UtilityProvider;
use crate::types::{Diagnostic, GenerateResult, UtilityRule};

/// 主生成函数
///
/// 将扫描到的候选类名分派给各个 provider，收集生成的规则
///
/// # 参数
///
/// * `candidates` - 内容扫描得到的类名（可以含空格、可以重复）
/// * `providers` - 按顺序尝试的 provider
pub fn generate(candidates: &[String], providers: &[&dyn UtilityProvider]) -> GenerateResult {
    // 1. 规范化类名（去重 + 排序，输出与扫描顺序无关）
    let normalized = normalize_classes(candidates);

    let mut result = GenerateResult::default();

    // 2. 逐个类名分派
    'classes: for class in normalized {
        for provider in providers {
            let Some(name) = strip_namespace(&class, provider.namespace()) else {
                continue;
            };
            if !provider.contains(name) {
                continue;
            }

            match provider.resolve(name) {
                Ok(Some(declarations)) => {
                    result.rules.push(UtilityRule {
                        class: class.clone(),
                        declarations,
                    });
                    continue 'classes;
                }
                Ok(None) => {}
                Err(err) => {
                    // 出错的类不生成规则，其它类照常继续
                    result.diagnostics.push(Diagnostic::error(err.to_string()));
                    continue 'classes;
                }
            }
        }

        result.unmatched.push(class);
    }

    result
}

/// 去掉 `{namespace}-` 前缀
fn strip_namespace<'a>(class: &'a str, namespace: &str) -> Option<&'a str> {
    class
        .strip_prefix(namespace)?
        .strip_prefix('-')
        .filter(|rest| !rest.is_empty())
}
