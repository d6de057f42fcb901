//! Fakes shared by the unit tests.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    bundle::BundleLocation,
    dev_server::DevServerProbe,
    host_view::{HostView, RootContainer, RootViewProps},
    menu_labels::{DebugMenu, ReactMenu},
    react_instance::ReactRuntime,
    value_writer::JsValueWriter,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriterEvent {
    Boolean(bool),
    Int64(i64),
    Double(f64),
    Null,
    String(String),
    ArrayBegin,
    ArrayEnd,
    ObjectBegin,
    PropertyName(String),
    ObjectEnd,
}

#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub events: Vec<WriterEvent>,
}

impl JsValueWriter for RecordingWriter {
    fn write_boolean(&mut self, value: bool) {
        self.events.push(WriterEvent::Boolean(value));
    }

    fn write_int64(&mut self, value: i64) {
        self.events.push(WriterEvent::Int64(value));
    }

    fn write_double(&mut self, value: f64) {
        self.events.push(WriterEvent::Double(value));
    }

    fn write_null(&mut self) {
        self.events.push(WriterEvent::Null);
    }

    fn write_string(&mut self, value: &str) {
        self.events.push(WriterEvent::String(value.to_string()));
    }

    fn write_array_begin(&mut self) {
        self.events.push(WriterEvent::ArrayBegin);
    }

    fn write_array_end(&mut self) {
        self.events.push(WriterEvent::ArrayEnd);
    }

    fn write_object_begin(&mut self) {
        self.events.push(WriterEvent::ObjectBegin);
    }

    fn write_property_name(&mut self, name: &str) {
        self.events.push(WriterEvent::PropertyName(name.to_string()));
    }

    fn write_object_end(&mut self) {
        self.events.push(WriterEvent::ObjectEnd);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeSettings {
    pub break_on_first_line: bool,
    pub use_direct_debugger: bool,
    pub use_fast_refresh: bool,
    pub use_web_debugger: bool,
}

#[derive(Debug)]
struct FakeRuntimeState {
    accepts_bundles: bool,
    custom_developer_menu: bool,
    loaded: Vec<BundleLocation>,
    settings: FakeSettings,
    inspector_toggles: usize,
    reloads: usize,
}

impl Default for FakeRuntimeState {
    fn default() -> Self {
        Self {
            accepts_bundles: true,
            custom_developer_menu: true,
            loaded: Vec::new(),
            settings: FakeSettings::default(),
            inspector_toggles: 0,
            reloads: 0,
        }
    }
}

/// Runtime double. Clones share state so tests can inspect what the page did.
#[derive(Debug, Clone, Default)]
pub struct FakeRuntime {
    state: Arc<Mutex<FakeRuntimeState>>,
}

impl FakeRuntime {
    pub fn set_accepts_bundles(&self, accepts: bool) {
        lock(&self.state).accepts_bundles = accepts;
    }

    pub fn set_custom_developer_menu(&self, enabled: bool) {
        lock(&self.state).custom_developer_menu = enabled;
    }

    pub fn loaded_locations(&self) -> Vec<BundleLocation> {
        lock(&self.state).loaded.clone()
    }

    pub fn settings(&self) -> FakeSettings {
        lock(&self.state).settings.clone()
    }

    pub fn inspector_toggles(&self) -> usize {
        lock(&self.state).inspector_toggles
    }

    pub fn reloads(&self) -> usize {
        lock(&self.state).reloads
    }
}

impl ReactRuntime for FakeRuntime {
    fn load_bundle(&mut self, location: &BundleLocation) -> bool {
        let mut state = lock(&self.state);
        if !state.accepts_bundles {
            return false;
        }
        state.loaded.push(location.clone());
        true
    }

    fn reload(&mut self) {
        lock(&self.state).reloads += 1;
    }

    fn break_on_first_line(&self) -> bool {
        lock(&self.state).settings.break_on_first_line
    }

    fn set_break_on_first_line(&mut self, value: bool) {
        lock(&self.state).settings.break_on_first_line = value;
    }

    fn use_direct_debugger(&self) -> bool {
        lock(&self.state).settings.use_direct_debugger
    }

    fn set_use_direct_debugger(&mut self, value: bool) {
        lock(&self.state).settings.use_direct_debugger = value;
    }

    fn use_fast_refresh(&self) -> bool {
        lock(&self.state).settings.use_fast_refresh
    }

    fn set_use_fast_refresh(&mut self, value: bool) {
        lock(&self.state).settings.use_fast_refresh = value;
    }

    fn use_web_debugger(&self) -> bool {
        lock(&self.state).settings.use_web_debugger
    }

    fn set_use_web_debugger(&mut self, value: bool) {
        lock(&self.state).settings.use_web_debugger = value;
    }

    fn toggle_element_inspector(&self) {
        lock(&self.state).inspector_toggles += 1;
    }

    fn use_custom_developer_menu(&self) -> bool {
        lock(&self.state).custom_developer_menu
    }
}

#[derive(Debug, Clone)]
pub struct FakeProbe {
    running: Arc<Mutex<bool>>,
}

impl FakeProbe {
    pub fn new(running: bool) -> Self {
        Self {
            running: Arc::new(Mutex::new(running)),
        }
    }

    pub fn set_running(&self, running: bool) {
        *lock(&self.running) = running;
    }
}

#[async_trait]
impl DevServerProbe for FakeProbe {
    async fn is_dev_server_running(&self) -> bool {
        *lock(&self.running)
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub title: Option<String>,
    pub bound: HashSet<RootContainer>,
    pub rendered: Vec<(RootContainer, RootViewProps)>,
    pub content_dialogs: Vec<String>,
    pub message_dialogs: Vec<String>,
    pub react_menu: Option<ReactMenu>,
    pub debug_menu: Option<DebugMenu>,
    pub react_menu_opened: usize,
    pub title_bar_height: Option<f64>,
}

impl ViewState {
    pub fn rendered_in(&self, container: RootContainer) -> Vec<&str> {
        self.rendered
            .iter()
            .filter(|(target, _)| *target == container)
            .map(|(_, props)| props.component_name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    state: Arc<Mutex<ViewState>>,
}

impl RecordingView {
    pub fn state(&self) -> MutexGuard<'_, ViewState> {
        lock(&self.state)
    }
}

#[async_trait]
impl HostView for RecordingView {
    fn set_title(&mut self, title: &str) {
        lock(&self.state).title = Some(title.to_string());
    }

    fn is_container_bound(&self, container: RootContainer) -> bool {
        lock(&self.state).bound.contains(&container)
    }

    fn bind_container(&mut self, container: RootContainer) {
        lock(&self.state).bound.insert(container);
    }

    fn render_component(&mut self, container: RootContainer, props: &RootViewProps) {
        lock(&self.state).rendered.push((container, props.clone()));
    }

    fn show_content_dialog(&mut self, title: &str) {
        lock(&self.state).content_dialogs.push(title.to_string());
    }

    async fn show_message_dialog(&mut self, message: &str) {
        lock(&self.state).message_dialogs.push(message.to_string());
    }

    fn apply_react_menu(&mut self, menu: &ReactMenu) {
        lock(&self.state).react_menu = Some(menu.clone());
    }

    fn apply_debug_menu(&mut self, menu: &DebugMenu) {
        lock(&self.state).debug_menu = Some(menu.clone());
    }

    fn open_react_menu(&mut self) {
        lock(&self.state).react_menu_opened += 1;
    }

    fn set_title_bar_height(&mut self, height: f64) {
        lock(&self.state).title_bar_height = Some(height);
    }
}
