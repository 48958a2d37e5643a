//! Markdown 富文本字符串
//!
//! - 追加纯文本时转义 markdown 控制字符
//! - 可信标记 / 主题图标支持在构造后不可变
//! - 与扩展宿主交换时使用的 JSON 结构（value / isTrusted / supportThemeIcons / uris）

use super::theme_icon::{escape_theme_icons, markdown_unescape_theme_icons};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// http://daringfireball.net/projects/markdown/syntax#backslash
const MARKDOWN_ESCAPED_CHARS: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '-', '.', '!',
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownStringOptions {
    pub is_trusted: bool,
    pub support_theme_icons: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownString {
    value: String,
    #[serde(default)]
    is_trusted: bool,
    #[serde(default)]
    support_theme_icons: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uris: Option<BTreeMap<String, String>>,
}

impl MarkdownString {
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_options(value, MarkdownStringOptions::default())
    }

    pub fn with_options(value: impl Into<String>, options: MarkdownStringOptions) -> Self {
        Self {
            value: value.into(),
            is_trusted: options.is_trusted,
            support_theme_icons: options.support_theme_icons,
            uris: None,
        }
    }

    pub fn trusted(value: impl Into<String>) -> Self {
        Self::with_options(
            value,
            MarkdownStringOptions {
                is_trusted: true,
                support_theme_icons: false,
            },
        )
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_trusted(&self) -> bool {
        self.is_trusted
    }

    pub fn support_theme_icons(&self) -> bool {
        self.support_theme_icons
    }

    pub fn uris(&self) -> Option<&BTreeMap<String, String>> {
        self.uris.as_ref()
    }

    /// 链接 href 到解析后 URI 的映射，由渲染端使用
    pub fn set_uris(&mut self, uris: BTreeMap<String, String>) {
        self.uris = Some(uris);
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 追加纯文本：转义控制字符，第一个换行变成段落分隔
    pub fn append_text(&mut self, value: &str) -> &mut Self {
        let escaped = escape_markdown_syntax(value).replacen('\n', "\n\n", 1);
        if self.support_theme_icons {
            self.value.push_str(&markdown_unescape_theme_icons(&escaped));
        } else {
            self.value.push_str(&escaped);
        }
        self
    }

    pub fn append_markdown(&mut self, value: &str) -> &mut Self {
        self.value.push_str(value);
        self
    }

    pub fn append_codeblock(&mut self, lang_id: &str, code: &str) -> &mut Self {
        self.value.push_str("\n```");
        self.value.push_str(lang_id);
        self.value.push('\n');
        self.value.push_str(code);
        self.value.push_str("\n```\n");
        self
    }

    pub fn escape_theme_icons(value: &str) -> String {
        escape_theme_icons(value)
    }
}

impl PartialEq for MarkdownString {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.value == other.value
                && self.is_trusted == other.is_trusted
                && self.support_theme_icons == other.support_theme_icons)
    }
}

impl Eq for MarkdownString {}

impl From<&str> for MarkdownString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn escape_markdown_syntax(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    for ch in value.chars() {
        if MARKDOWN_ESCAPED_CHARS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// 单个或一组 markdown 字符串（hover 等场景会给出多段）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkedStrings {
    One(MarkdownString),
    Many(Vec<MarkdownString>),
}

impl From<MarkdownString> for MarkedStrings {
    fn from(value: MarkdownString) -> Self {
        MarkedStrings::One(value)
    }
}

impl From<Vec<MarkdownString>> for MarkedStrings {
    fn from(values: Vec<MarkdownString>) -> Self {
        MarkedStrings::Many(values)
    }
}

pub fn is_empty_markdown_string(value: Option<&MarkedStrings>) -> bool {
    match value {
        Some(MarkedStrings::One(s)) => s.is_empty(),
        Some(MarkedStrings::Many(list)) => list.iter().all(MarkdownString::is_empty),
        None => true,
    }
}

pub fn marked_strings_equal(a: Option<&MarkedStrings>, b: Option<&MarkedStrings>) -> bool {
    match (a, b) {
        (None, None) => true,
        (None, _) | (_, None) => false,
        (Some(MarkedStrings::Many(a)), Some(MarkedStrings::Many(b))) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
        }
        (Some(MarkedStrings::One(a)), Some(MarkedStrings::One(b))) => a == b,
        _ => false,
    }
}

/// 结构检查：对象且 value 为字符串，isTrusted / supportThemeIcons 为布尔或缺省
pub fn is_markdown_string(thing: &Value) -> bool {
    let Some(obj) = thing.as_object() else {
        return false;
    };
    let optional_bool = |key: &str| match obj.get(key) {
        None => true,
        Some(v) => v.is_boolean(),
    };
    obj.get("value").is_some_and(Value::is_string)
        && optional_bool("isTrusted")
        && optional_bool("supportThemeIcons")
}

/// append_text 转义的逆操作
pub fn remove_markdown_escapes(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if MARKDOWN_ESCAPED_CHARS.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefAndDimensions {
    pub href: String,
    pub dimensions: Vec<String>,
}

fn height_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"height=(\d+)").expect("valid height regex"))
}

fn width_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"width=(\d+)").expect("valid width regex"))
}

/// `url|height=200,width=100` → href + HTML 尺寸属性（宽在前）
pub fn parse_href_and_dimensions(href: &str) -> HrefAndDimensions {
    let mut parts = href.split('|').map(str::trim);
    let href = parts.next().unwrap_or_default().to_string();
    let mut dimensions = Vec::new();

    if let Some(parameters) = parts.next().filter(|p| !p.is_empty()) {
        let capture = |re: &Regex| {
            re.captures(parameters)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };
        let height = capture(height_regex());
        let width = capture(width_regex());

        // 数字过长会溢出成无穷大，这种尺寸直接丢弃
        let is_finite = |digits: &str| digits.parse::<f64>().is_ok_and(f64::is_finite);

        if let Some(width) = width.filter(|w| is_finite(w)) {
            dimensions.push(format!("width=\"{}\"", width));
        }
        if let Some(height) = height.filter(|h| is_finite(h)) {
            dimensions.push(format!("height=\"{}\"", height));
        }
    }

    HrefAndDimensions { href, dimensions }
}

#[cfg(test)]
#[path = "../../tests/unit/models/markdown_string.rs"]
mod tests;
