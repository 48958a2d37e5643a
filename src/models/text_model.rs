//! 文本模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 行列 ↔ 字符偏移映射
//! - 内容 / 语言变化通知
//!
//! TextModel 是单线程共享句柄，clone 得到的是同一个模型。

use crate::core::{Emitter, Subscription};
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{self, Read, Write};
use std::rc::Rc;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// 构建文本模型用的内容源
#[derive(Clone, Default)]
pub struct TextBufferFactory {
    rope: Rope,
}

impl TextBufferFactory {
    pub fn from_string(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        Ok(Self {
            rope: Rope::from_reader(reader)?,
        })
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn into_rope(self) -> Rope {
        self.rope
    }
}

impl fmt::Debug for TextBufferFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBufferFactory")
            .field("len_chars", &self.rope.len_chars())
            .finish()
    }
}

impl From<TextSnapshot> for TextBufferFactory {
    fn from(snapshot: TextSnapshot) -> Self {
        Self {
            rope: snapshot.rope,
        }
    }
}

/// 某一时刻的只读内容快照（Rope clone 为 O(1)）
#[derive(Clone, Default)]
pub struct TextSnapshot {
    rope: Rope,
}

impl TextSnapshot {
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// 流式写入到 Writer，避免大文件 OOM
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.rope.chunks() {
            writer.write_all(chunk.as_bytes())?;
        }
        Ok(())
    }
}

impl From<&str> for TextSnapshot {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSnapshot")
            .field("len_chars", &self.rope.len_chars())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelContentChangedEvent {
    pub version_id: u64,
    /// 整体替换（set_value）而非局部编辑
    pub is_flush: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChangedEvent {
    pub old_language: String,
    pub new_language: String,
}

/// 行列区间，列按字符计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl TextRange {
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    pub fn empty(pos: (usize, usize)) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

struct TextModelInner {
    rope: RefCell<Rope>,
    language_id: RefCell<String>,
    version_id: Cell<u64>,
    on_did_change_content: Emitter<ModelContentChangedEvent>,
    on_did_change_language: Emitter<LanguageChangedEvent>,
}

#[derive(Clone)]
pub struct TextModel {
    inner: Rc<TextModelInner>,
}

impl TextModel {
    pub fn from_factory(factory: TextBufferFactory, language_id: &str) -> Self {
        Self {
            inner: Rc::new(TextModelInner {
                rope: RefCell::new(factory.into_rope()),
                language_id: RefCell::new(language_id.to_string()),
                version_id: Cell::new(1),
                on_did_change_content: Emitter::new(),
                on_did_change_language: Emitter::new(),
            }),
        }
    }

    pub fn from_text(text: &str, language_id: &str) -> Self {
        Self::from_factory(TextBufferFactory::from_string(text), language_id)
    }

    pub fn value(&self) -> String {
        self.inner.rope.borrow().to_string()
    }

    pub fn create_snapshot(&self) -> TextSnapshot {
        TextSnapshot {
            rope: self.inner.rope.borrow().clone(),
        }
    }

    pub fn len_chars(&self) -> usize {
        self.inner.rope.borrow().len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// 行数，末尾换行之后的空行也算一行
    pub fn line_count(&self) -> usize {
        self.inner.rope.borrow().len_lines()
    }

    /// 第 row 行（从 0 开始）的内容，不含换行符
    pub fn line_content(&self, row: usize) -> Option<String> {
        let rope = self.inner.rope.borrow();
        if row >= rope.len_lines() {
            return None;
        }
        let line = slice_to_cow(rope.line(row));
        Some(
            line.trim_end_matches('\n')
                .trim_end_matches('\r')
                .to_string(),
        )
    }

    pub fn language_id(&self) -> String {
        self.inner.language_id.borrow().clone()
    }

    pub fn version_id(&self) -> u64 {
        self.inner.version_id.get()
    }

    pub fn is_same(&self, other: &TextModel) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn set_language_id(&self, language_id: &str) {
        let old_language = {
            let mut current = self.inner.language_id.borrow_mut();
            if *current == language_id {
                return;
            }
            std::mem::replace(&mut *current, language_id.to_string())
        };

        self.inner.on_did_change_language.fire(&LanguageChangedEvent {
            old_language,
            new_language: language_id.to_string(),
        });
    }

    pub fn set_value(&self, text: &str) {
        self.set_value_from_factory(TextBufferFactory::from_string(text));
    }

    pub fn set_value_from_factory(&self, factory: TextBufferFactory) {
        *self.inner.rope.borrow_mut() = factory.into_rope();
        self.emit_content_changed(true);
    }

    pub fn insert(&self, pos: (usize, usize), text: &str) {
        self.apply_edit(TextRange::empty(pos), text);
    }

    pub fn delete(&self, range: TextRange) {
        self.apply_edit(range, "");
    }

    /// 用 text 替换 range，越界位置会被钳制到文档内
    pub fn apply_edit(&self, range: TextRange, text: &str) {
        {
            let mut rope = self.inner.rope.borrow_mut();
            let start = pos_to_char(&rope, range.start);
            let end = pos_to_char(&rope, range.end).max(start);
            if start < end {
                rope.remove(start..end);
            }
            if !text.is_empty() {
                rope.insert(start, text);
            }
        }
        self.emit_content_changed(false);
    }

    pub fn on_did_change_content(
        &self,
        listener: impl FnMut(&ModelContentChangedEvent) + 'static,
    ) -> Subscription {
        self.inner.on_did_change_content.subscribe(listener)
    }

    pub fn on_did_change_language(
        &self,
        listener: impl FnMut(&LanguageChangedEvent) + 'static,
    ) -> Subscription {
        self.inner.on_did_change_language.subscribe(listener)
    }

    fn emit_content_changed(&self, is_flush: bool) {
        let version_id = self.inner.version_id.get() + 1;
        self.inner.version_id.set(version_id);
        self.inner
            .on_did_change_content
            .fire(&ModelContentChangedEvent {
                version_id,
                is_flush,
            });
    }
}

impl fmt::Debug for TextModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextModel")
            .field("language_id", &*self.inner.language_id.borrow())
            .field("version_id", &self.inner.version_id.get())
            .field("len_chars", &self.len_chars())
            .finish()
    }
}

fn line_len_without_eol(rope: &Rope, row: usize) -> usize {
    let line = rope.line(row);
    let mut len = line.len_chars();
    if len > 0 && line.char(len - 1) == '\n' {
        len -= 1;
        if len > 0 && line.char(len - 1) == '\r' {
            len -= 1;
        }
    } else if len > 0 && line.char(len - 1) == '\r' {
        len -= 1;
    }
    len
}

fn pos_to_char(rope: &Rope, (row, col): (usize, usize)) -> usize {
    let last_row = rope.len_lines().saturating_sub(1);
    if row > last_row {
        return rope.len_chars();
    }
    rope.line_to_char(row) + col.min(line_len_without_eol(rope, row))
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_model.rs"]
mod tests;
