//! 未命名文本文档模型
//!
//! 状态：未解析 → load() → 已解析（干净 / 脏）
//!
//! - 内容来源：已有备份优先，其次初始内容，最后为空
//! - 每次内容变化 version_id + 1，并重新计算脏标记
//! - 内容变化通知经过 RunOnceScheduler 合并，由宿主 tick 调用
//!   `poll_content_change` 派发
//! - 编码：用户选择的编码优先于配置中的 files.encoding

use super::language::resolve_mode;
use super::resource::Resource;
use super::text_model::{TextBufferFactory, TextModel, TextSnapshot};
use crate::core::{DisposableStore, Emitter, RunOnceScheduler, Subscription};
use crate::services::ports::backup::{self, BackupFileService};
use crate::services::ports::config::{
    ConfigurationChangeEvent, TextResourceConfigurationService, FILES_ENCODING,
};
use crate::services::ports::text_file::{self, SaveOptions, TextFileService};
use crate::services::ports::working_copy::{
    self, WorkingCopy, WorkingCopyCapabilities, WorkingCopyService,
};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// 内容变化通知的合并延迟
pub const CONTENT_CHANGE_BUFFER_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct UntitledTextModelOptions {
    pub resource: Resource,
    pub has_associated_file_path: bool,
    pub initial_value: Option<String>,
    pub preferred_mode: Option<String>,
    pub preferred_encoding: Option<String>,
}

impl UntitledTextModelOptions {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            has_associated_file_path: false,
            initial_value: None,
            preferred_mode: None,
            preferred_encoding: None,
        }
    }

    pub fn with_associated_file_path(mut self, associated: bool) -> Self {
        self.has_associated_file_path = associated;
        self
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.preferred_mode = Some(mode.into());
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.preferred_encoding = Some(encoding.into());
        self
    }
}

/// 模型依赖的外部服务
#[derive(Clone)]
pub struct UntitledServices {
    pub backup: Rc<dyn BackupFileService>,
    pub configuration: Rc<dyn TextResourceConfigurationService>,
    pub working_copies: Rc<dyn WorkingCopyService>,
    pub text_files: Rc<dyn TextFileService>,
}

/// 模型与各类监听器共享的状态，监听器只持有 Weak
struct UntitledState {
    resource: Resource,
    has_associated_file_path: bool,
    preferred_mode: Option<String>,
    dirty: Cell<bool>,
    version_id: Cell<u64>,
    disposed: Cell<bool>,
    preferred_encoding: RefCell<Option<String>>,
    configured_encoding: RefCell<Option<String>>,
    text_model: RefCell<Option<TextModel>>,
    content_change_scheduler: RunOnceScheduler,
    on_did_change_content: Emitter<()>,
    on_did_change_dirty: Emitter<()>,
    on_did_change_encoding: Emitter<()>,
    configuration: Rc<dyn TextResourceConfigurationService>,
}

impl UntitledState {
    fn text_model(&self) -> Option<TextModel> {
        self.text_model.borrow().clone()
    }

    fn is_resolved(&self) -> bool {
        self.text_model.borrow().is_some()
    }

    fn set_dirty(&self, dirty: bool) {
        if self.dirty.get() == dirty {
            return;
        }

        self.dirty.set(dirty);
        tracing::debug!(resource = %self.resource, dirty, "untitled dirty changed");
        self.on_did_change_dirty.fire(&());
    }

    fn encoding(&self) -> Option<String> {
        non_empty(self.preferred_encoding.borrow().as_deref())
            .or_else(|| non_empty(self.configured_encoding.borrow().as_deref()))
    }

    fn has_preferred_encoding(&self) -> bool {
        non_empty(self.preferred_encoding.borrow().as_deref()).is_some()
    }

    fn on_configuration_change(&self) {
        if self.disposed.get() {
            return;
        }

        let configured = self.configuration.get_value(&self.resource, FILES_ENCODING);
        if *self.configured_encoding.borrow() == configured {
            return;
        }
        *self.configured_encoding.borrow_mut() = configured;

        // 用户显式选择过编码时，全局配置变化不影响有效编码
        if !self.has_preferred_encoding() {
            tracing::debug!(
                resource = %self.resource,
                encoding = ?self.encoding(),
                "untitled encoding follows configuration"
            );
            self.on_did_change_encoding.fire(&());
        }
    }

    fn on_model_content_changed(&self) {
        if self.disposed.get() {
            return;
        }
        let Some(text_model) = self.text_model() else {
            return;
        };

        self.version_id.set(self.version_id.get() + 1);

        // 没有关联路径且内容清空为单个空行时不显示脏标记
        let is_blank = text_model.line_count() == 1
            && text_model.line_content(0).is_some_and(|line| line.is_empty());
        if !self.has_associated_file_path && is_blank {
            self.set_dirty(false);
        } else {
            self.set_dirty(true);
        }

        self.content_change_scheduler.schedule();
    }
}

impl WorkingCopy for UntitledState {
    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn capabilities(&self) -> WorkingCopyCapabilities {
        WorkingCopyCapabilities::NONE
    }

    fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn snapshot(&self) -> Option<TextSnapshot> {
        self.text_model().map(|m| m.create_snapshot())
    }

    fn associated_path(&self) -> Option<PathBuf> {
        self.has_associated_file_path
            .then(|| self.resource.to_path_buf())
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

pub struct UntitledTextModel {
    state: Rc<UntitledState>,
    initial_value: Option<String>,
    backup_service: Rc<dyn BackupFileService>,
    text_file_service: Rc<dyn TextFileService>,
    registrations: DisposableStore,
    model_listeners: DisposableStore,
}

impl UntitledTextModel {
    /// 创建后立即注册为工作副本并监听配置变化
    pub fn new(
        options: UntitledTextModelOptions,
        services: UntitledServices,
    ) -> working_copy::Result<Self> {
        let state = Rc::new(UntitledState {
            resource: options.resource,
            has_associated_file_path: options.has_associated_file_path,
            preferred_mode: options.preferred_mode,
            dirty: Cell::new(false),
            version_id: Cell::new(0),
            disposed: Cell::new(false),
            preferred_encoding: RefCell::new(options.preferred_encoding),
            configured_encoding: RefCell::new(None),
            text_model: RefCell::new(None),
            content_change_scheduler: RunOnceScheduler::new(CONTENT_CHANGE_BUFFER_DELAY),
            on_did_change_content: Emitter::new(),
            on_did_change_dirty: Emitter::new(),
            on_did_change_encoding: Emitter::new(),
            configuration: Rc::clone(&services.configuration),
        });

        let mut registrations = DisposableStore::new();
        let working_copy: Rc<dyn WorkingCopy> = state.clone();
        registrations.add(services.working_copies.register_working_copy(working_copy)?);

        let weak = Rc::downgrade(&state);
        registrations.add(services.configuration.on_did_change_configuration(Box::new(
            move |_: &ConfigurationChangeEvent| {
                if let Some(state) = weak.upgrade() {
                    state.on_configuration_change();
                }
            },
        )));

        tracing::debug!(resource = %state.resource, "untitled model created");

        Ok(Self {
            state,
            initial_value: options.initial_value,
            backup_service: services.backup,
            text_file_service: services.text_files,
            registrations,
            model_listeners: DisposableStore::new(),
        })
    }

    pub fn resource(&self) -> &Resource {
        &self.state.resource
    }

    pub fn has_associated_file_path(&self) -> bool {
        self.state.has_associated_file_path
    }

    pub fn capabilities(&self) -> WorkingCopyCapabilities {
        WorkingCopyCapabilities::NONE
    }

    pub fn version_id(&self) -> u64 {
        self.state.version_id.get()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.dirty.get()
    }

    pub fn set_dirty(&self, dirty: bool) {
        self.state.set_dirty(dirty);
    }

    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    pub fn is_readonly(&self) -> bool {
        false
    }

    /// 已解析时的文本模型句柄，编辑直接作用在该模型上
    pub fn text_model(&self) -> Option<TextModel> {
        self.state.text_model()
    }

    pub fn create_snapshot(&self) -> Option<TextSnapshot> {
        self.state.text_model().map(|m| m.create_snapshot())
    }

    /// 已解析时返回模型当前语言，否则返回构造时请求的模式
    pub fn mode(&self) -> Option<String> {
        match self.state.text_model() {
            Some(model) => Some(model.language_id()),
            None => self.state.preferred_mode.clone(),
        }
    }

    pub fn encoding(&self) -> Option<String> {
        self.state.encoding()
    }

    pub fn set_encoding(&self, encoding: &str) {
        let old_encoding = self.state.encoding();
        *self.state.preferred_encoding.borrow_mut() = Some(encoding.to_string());

        if old_encoding.as_deref() != Some(encoding) {
            tracing::info!(
                resource = %self.state.resource,
                from = ?old_encoding,
                to = encoding,
                "untitled encoding changed"
            );
            self.state.on_did_change_encoding.fire(&());
        }
    }

    pub fn on_did_change_content(&self, mut listener: impl FnMut() + 'static) -> Subscription {
        self.state.on_did_change_content.subscribe(move |_| listener())
    }

    pub fn on_did_change_dirty(&self, mut listener: impl FnMut() + 'static) -> Subscription {
        self.state.on_did_change_dirty.subscribe(move |_| listener())
    }

    pub fn on_did_change_encoding(&self, mut listener: impl FnMut() + 'static) -> Subscription {
        self.state.on_did_change_encoding.subscribe(move |_| listener())
    }

    /// 解析模型。失败时保持未解析状态，可以重试
    pub async fn load(&mut self) -> backup::Result<()> {
        let resource = self.state.resource.clone();

        let mut backup = None;
        if let Some(backup_resource) = self.backup_service.load_backup_resource(&resource).await? {
            backup = Some(
                self.backup_service
                    .resolve_backup_content(&backup_resource)
                    .await?,
            );
        }

        let has_initial_value = self
            .initial_value
            .as_deref()
            .is_some_and(|v| !v.is_empty());
        let from_backup = backup.is_some();

        // 关联了路径或有内容的未命名文档一开始就是脏的
        self.state
            .set_dirty(self.state.has_associated_file_path || from_backup || has_initial_value);

        let contents = match backup {
            Some(backup) => backup.value,
            None => TextBufferFactory::from_string(self.initial_value.as_deref().unwrap_or_default()),
        };

        let existing = self.state.text_model();
        let text_model = match existing {
            Some(model) => {
                model.set_value_from_factory(contents);
                if let Some(mode) = self.state.preferred_mode.as_deref() {
                    model.set_language_id(mode);
                }
                model
            }
            None => {
                let mode = resolve_mode(self.state.preferred_mode.as_deref(), &resource);
                let model = TextModel::from_factory(contents, &mode);
                *self.state.text_model.borrow_mut() = Some(model.clone());
                model
            }
        };

        *self.state.configured_encoding.borrow_mut() = self
            .state
            .configuration
            .get_value(&resource, FILES_ENCODING);

        // 重复 load 时替换旧监听器，避免一次编辑被计数多次
        self.model_listeners.clear();

        let weak = Rc::downgrade(&self.state);
        self.model_listeners
            .add(text_model.on_did_change_content(move |_| {
                if let Some(state) = weak.upgrade() {
                    state.on_model_content_changed();
                }
            }));

        // 语言变化可能影响按资源解析的配置
        let weak = Rc::downgrade(&self.state);
        self.model_listeners
            .add(text_model.on_did_change_language(move |_| {
                if let Some(state) = weak.upgrade() {
                    state.on_configuration_change();
                }
            }));

        tracing::info!(
            resource = %resource,
            from_backup,
            dirty = self.state.dirty.get(),
            mode = %text_model.language_id(),
            "untitled model resolved"
        );

        Ok(())
    }

    pub async fn save(&self, options: SaveOptions) -> text_file::Result<bool> {
        let saved = self
            .text_file_service
            .save(&self.state.resource, options)
            .await?;
        tracing::info!(resource = %self.state.resource, saved, reason = ?options.reason, "untitled save");
        Ok(saved)
    }

    pub fn revert(&self) -> bool {
        self.state.set_dirty(false);
        self.state.content_change_scheduler.schedule();
        true
    }

    pub async fn backup(&self) -> backup::Result<()> {
        let Some(snapshot) = self.create_snapshot() else {
            return Ok(());
        };

        let version_id = self.version_id();
        self.backup_service
            .backup_resource(&self.state.resource, snapshot, version_id)
            .await?;
        tracing::debug!(resource = %self.state.resource, version_id, "untitled backup written");
        Ok(())
    }

    pub fn has_backup(&self) -> bool {
        self.backup_service
            .has_backup_sync(&self.state.resource, Some(self.version_id()))
    }

    pub fn poll_content_change(&self) -> bool {
        self.poll_content_change_at(Instant::now())
    }

    /// 合并后的内容变化通知到期时派发，返回是否派发
    pub fn poll_content_change_at(&self, now: Instant) -> bool {
        if !self.state.content_change_scheduler.poll_at(now) {
            return false;
        }
        self.state.on_did_change_content.fire(&());
        true
    }

    /// 释放所有订阅并取消挂起的通知，之后不再派发任何事件
    pub fn dispose(&mut self) {
        if self.state.disposed.replace(true) {
            return;
        }

        self.state.content_change_scheduler.cancel();
        self.model_listeners.clear();
        self.registrations.clear();
        self.state.on_did_change_content.dispose();
        self.state.on_did_change_dirty.dispose();
        self.state.on_did_change_encoding.dispose();
        tracing::debug!(resource = %self.state.resource, "untitled model disposed");
    }
}

impl Drop for UntitledTextModel {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/untitled_text_model.rs"]
mod tests;
