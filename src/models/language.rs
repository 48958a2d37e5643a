use std::path::Path;

use super::resource::Resource;

pub const PLAINTEXT_MODE_ID: &str = "plaintext";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    Rust,
    Go,
    Python,
    JavaScript,
    TypeScript,
    C,
    Cpp,
    Java,
    Json,
    Markdown,
    Toml,
    Yaml,
    Html,
    Css,
    Shell,
    PlainText,
}

impl LanguageId {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str())? {
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "py" | "pyi" => Some(Self::Python),
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" | "tsx" => Some(Self::TypeScript),
            "c" => Some(Self::C),
            "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" | "h" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "json" | "jsonc" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "html" | "htm" => Some(Self::Html),
            "css" => Some(Self::Css),
            "sh" | "bash" | "zsh" => Some(Self::Shell),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "rust" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "python" => Some(Self::Python),
            "javascript" => Some(Self::JavaScript),
            "typescript" => Some(Self::TypeScript),
            "c" => Some(Self::C),
            "cpp" => Some(Self::Cpp),
            "java" => Some(Self::Java),
            "json" => Some(Self::Json),
            "markdown" => Some(Self::Markdown),
            "toml" => Some(Self::Toml),
            "yaml" => Some(Self::Yaml),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "shellscript" => Some(Self::Shell),
            PLAINTEXT_MODE_ID => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Html => "html",
            Self::Css => "css",
            Self::Shell => "shellscript",
            Self::PlainText => PLAINTEXT_MODE_ID,
        }
    }
}

/// 资源路径能推断出的语言
pub fn language_for_resource(resource: &Resource) -> Option<LanguageId> {
    LanguageId::from_path(Path::new(resource.path()))
}

/// 显式指定的模式优先，其次按路径扩展名推断，最后回落到纯文本
pub fn resolve_mode(preferred: Option<&str>, resource: &Resource) -> String {
    if let Some(mode) = preferred.filter(|m| !m.is_empty()) {
        return mode.to_string();
    }
    language_for_resource(resource)
        .map(LanguageId::language_id)
        .unwrap_or(PLAINTEXT_MODE_ID)
        .to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/models/language.rs"]
mod tests;
