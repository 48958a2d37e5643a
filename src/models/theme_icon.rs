//! 主题图标占位符 `$(name)` / `$(name~modifier)`

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn icon_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\\)?\$\([a-z0-9\-]+?(?:~[a-z0-9\-]*?)?\)").expect("valid icon regex")
    })
}

/// markdown 转义之后的图标形如 `$\(name\)`，名称里的 `-` 也被转义成 `\-`
fn markdown_escaped_icon_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(\\)?\$\\\(((?:[a-z0-9]|\\-)+?(?:~(?:[a-z0-9]|\\-)*?)?)\\\)")
            .expect("valid escaped icon regex")
    })
}

/// 给未转义的图标占位符加上反斜杠，使其按字面显示
pub fn escape_theme_icons(text: &str) -> String {
    icon_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            if caps.get(1).is_some() {
                whole.to_string()
            } else {
                format!("\\{}", whole)
            }
        })
        .into_owned()
}

/// 把 markdown 转义后的图标还原成 `$(name)`，前面带反斜杠的保持原样
pub fn markdown_unescape_theme_icons(text: &str) -> String {
    markdown_escaped_icon_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                format!("$({})", caps[2].replace("\\-", "-"))
            }
        })
        .into_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/models/theme_icon.rs"]
mod tests;
