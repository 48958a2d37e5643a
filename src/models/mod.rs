//! 数据模型层

pub mod language;
pub mod markdown_string;
pub mod resource;
pub mod text_model;
pub mod theme_icon;
pub mod untitled_text_model;

pub use language::{resolve_mode, LanguageId, PLAINTEXT_MODE_ID};
pub use markdown_string::{
    is_empty_markdown_string, is_markdown_string, marked_strings_equal,
    parse_href_and_dimensions, remove_markdown_escapes, HrefAndDimensions, MarkdownString,
    MarkdownStringOptions, MarkedStrings,
};
pub use resource::{Resource, FILE_SCHEME, UNTITLED_SCHEME};
pub use text_model::{
    slice_to_cow, LanguageChangedEvent, ModelContentChangedEvent, TextBufferFactory, TextModel,
    TextRange, TextSnapshot,
};
pub use theme_icon::{escape_theme_icons, markdown_unescape_theme_icons};
pub use untitled_text_model::{
    UntitledServices, UntitledTextModel, UntitledTextModelOptions, CONTENT_CHANGE_BUFFER_DELAY,
};
