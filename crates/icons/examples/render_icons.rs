/// 从 heroicons 目录和一段模板生成图标 CSS
///
/// 运行示例：
/// ```bash
/// cargo run --example render_icons -p heromask-icons -- deps/heroicons/optimized lib/app_web.html
/// ```

use heromask_core::{extract_candidates, generate};
use heromask_css::emit_stylesheet;
use heromask_icons::{HeroIcons, IconOptions};
use std::{env, fs, process};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [base_dir, template] = args.as_slice() else {
        eprintln!("usage: render_icons <heroicons-dir> <template-file>");
        process::exit(2);
    };

    let icons = match HeroIcons::build(IconOptions::new(base_dir)) {
        Ok(icons) => icons,
        Err(e) => {
            eprintln!("✗ {}", e);
            process::exit(1);
        }
    };
    eprintln!("✓ 发现 {} 个图标", icons.registry().len());

    let source = match fs::read_to_string(template) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("✗ 无法读取 {}: {}", template, e);
            process::exit(1);
        }
    };

    let result = generate(&extract_candidates(&source), &[&icons]);
    for diagnostic in &result.diagnostics {
        eprintln!("✗ {}", diagnostic.message);
    }

    println!("{}", emit_stylesheet(&result.rules, "  "));
    eprintln!("✓ 生成 {} 条规则", result.rules.len());

    if result.has_errors() {
        process::exit(1);
    }
}
