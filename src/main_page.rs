//! Page controller: decides which component to show and keeps the menus current.

use std::sync::Arc;

use crate::{
    bundle::{bundle_not_found_message, JsBundleSource},
    dev_server::DevServerProbe,
    host_view::{HostView, RootContainer, RootViewProps},
    manifest::{Component, Manifest},
    menu_actions::MenuAction,
    menu_labels::{
        break_on_first_line_text, direct_debugger_text, fast_refresh_text, web_debugger_text,
        DebugMenu, ReactMenu, ToggleItem,
    },
    react_instance::ReactInstance,
    session::SessionStore,
    ui_dispatch::{UiDispatcher, UiInbox, UiMessage},
    DEV_SERVER_UNREACHABLE_MESSAGE,
};

pub struct PageServices {
    pub instance: ReactInstance,
    pub session: Box<dyn SessionStore>,
    pub probe: Arc<dyn DevServerProbe>,
    pub view: Box<dyn HostView>,
    pub dispatcher: UiDispatcher,
}

pub struct MainPage {
    instance: ReactInstance,
    session: Box<dyn SessionStore>,
    probe: Arc<dyn DevServerProbe>,
    view: Box<dyn HostView>,
    manifest_checksum: String,
    react_menu: ReactMenu,
    debug_menu: DebugMenu,
    is_loaded: bool,
    pending_component: Option<Component>,
    presented: Option<Component>,
}

impl MainPage {
    /// Builds the page for `manifest`; `None` means `app.json` was missing or
    /// could not be parsed.
    pub fn new(manifest: Option<Manifest>, services: PageServices) -> Self {
        let PageServices {
            mut instance,
            session,
            probe,
            view,
            dispatcher,
        } = services;

        let mut manifest_checksum = String::new();
        if let Some(manifest) = &manifest {
            instance.set_bundle_root(manifest.bundle_root.clone());
            manifest_checksum = manifest.checksum.clone();
        }

        let mut page = Self {
            instance,
            session,
            probe,
            view,
            manifest_checksum,
            react_menu: ReactMenu::default(),
            debug_menu: DebugMenu::default(),
            is_loaded: false,
            pending_component: None,
            presented: None,
        };
        page.view.apply_debug_menu(&page.debug_menu);
        page.initialize_react_menu(manifest, dispatcher);
        page
    }

    pub fn react_menu(&self) -> &ReactMenu {
        &self.react_menu
    }

    pub fn debug_menu(&self) -> &DebugMenu {
        &self.debug_menu
    }

    pub fn instance(&self) -> &ReactInstance {
        &self.instance
    }

    pub fn is_presenting(&self) -> bool {
        self.presented.is_some()
    }

    pub fn presented_component(&self) -> Option<&Component> {
        self.presented.as_ref()
    }

    /// Applies UI messages until every dispatcher is gone.
    pub async fn run(mut self, mut inbox: UiInbox) {
        while let Some(message) = inbox.recv().await {
            self.handle(message).await;
        }
        tracing::info!("ui loop stopped");
    }

    /// Applies every message already queued, without waiting for more.
    pub async fn drain(&mut self, inbox: &mut UiInbox) {
        while let Some(message) = inbox.try_recv() {
            self.handle(message).await;
        }
    }

    pub async fn handle(&mut self, message: UiMessage) {
        match message {
            UiMessage::NavigatedTo => self.on_navigated_to().await,
            UiMessage::Loaded => self.on_loaded(),
            UiMessage::MenuAction(action) => self.handle_menu_action(action).await,
            UiMessage::ComponentsRegistered(components) => self.on_components_registered(components),
            UiMessage::PresentReactMenu => self.present_react_menu(),
            UiMessage::TitleBarMetricsChanged { height } => self.view.set_title_bar_height(height),
        }
    }

    pub async fn handle_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::LoadFromDevServer => {
                self.load_from_dev_server().await;
            }
            MenuAction::LoadFromJsBundle => {
                self.load_from_js_bundle().await;
            }
            MenuAction::ToggleRememberLastComponent => self.toggle_remember_last_component(),
            MenuAction::Reload => self.reload(),
            MenuAction::ToggleWebDebugger => self.toggle_web_debugger(),
            MenuAction::ToggleDirectDebugger => self.toggle_direct_debugger(),
            MenuAction::ToggleBreakOnFirstLine => self.toggle_break_on_first_line(),
            MenuAction::ToggleFastRefresh => self.toggle_fast_refresh(),
            MenuAction::ToggleInspector => self.instance.toggle_element_inspector(),
            MenuAction::OpenComponent(index) => self.open_component(index),
        }
    }

    async fn on_navigated_to(&mut self) {
        if self.probe.is_dev_server_running().await {
            self.load_js_bundle_from(JsBundleSource::DevServer);
        } else {
            self.load_from_js_bundle().await;
        }
    }

    fn on_loaded(&mut self) {
        self.is_loaded = true;
        if let Some(component) = self.pending_component.take() {
            self.load_react_component(&component);
        }
    }

    pub async fn load_from_dev_server(&mut self) -> bool {
        if !self.probe.is_dev_server_running().await {
            tracing::info!("development server is not reachable");
            self.view
                .show_message_dialog(DEV_SERVER_UNREACHABLE_MESSAGE)
                .await;
            return false;
        }

        self.load_js_bundle_from(JsBundleSource::DevServer)
    }

    pub async fn load_from_js_bundle(&mut self) -> bool {
        if self.load_js_bundle_from(JsBundleSource::Embedded) {
            return true;
        }

        self.view
            .show_message_dialog(&bundle_not_found_message())
            .await;
        false
    }

    fn load_js_bundle_from(&mut self, source: JsBundleSource) -> bool {
        if !self.instance.load_js_bundle_from(source) {
            return false;
        }

        self.initialize_debug_menu();
        true
    }

    fn initialize_debug_menu(&mut self) {
        if !self.instance.use_custom_developer_menu() {
            return;
        }

        self.debug_menu = DebugMenu {
            enabled: true,
            web_debugger: ToggleItem {
                text: web_debugger_text(self.instance.use_web_debugger()),
                enabled: self.instance.is_web_debugger_available(),
            },
            direct_debugger: ToggleItem {
                text: direct_debugger_text(self.instance.use_direct_debugger()),
                enabled: true,
            },
            break_on_first_line: ToggleItem {
                text: break_on_first_line_text(self.instance.break_on_first_line()),
                enabled: true,
            },
            fast_refresh: ToggleItem {
                text: fast_refresh_text(self.instance.use_fast_refresh()),
                enabled: self.instance.is_fast_refresh_available(),
            },
        };
        self.view.apply_debug_menu(&self.debug_menu);
    }

    fn initialize_react_menu(&mut self, manifest: Option<Manifest>, dispatcher: UiDispatcher) {
        let remember_last_component = self.session.should_remember_last_component();

        let Some(manifest) = manifest else {
            self.react_menu = ReactMenu::unparsable_manifest(remember_last_component);
            self.view.apply_react_menu(&self.react_menu);
            return;
        };

        self.react_menu = ReactMenu::new(remember_last_component);
        self.view.set_title(&manifest.display_name);

        // The delegate must not keep the ui loop alive on its own.
        let dispatcher = dispatcher.downgrade();
        if manifest.components.is_empty() {
            self.instance
                .set_components_registered_delegate(move |app_keys: Vec<String>| {
                    let Some(dispatcher) = dispatcher.upgrade() else {
                        tracing::debug!("components registered after ui loop stopped");
                        return;
                    };
                    let components = app_keys.into_iter().map(Component::from_app_key).collect();
                    dispatcher.deliver(
                        "components registered",
                        vec![
                            UiMessage::ComponentsRegistered(components),
                            UiMessage::PresentReactMenu,
                        ],
                    );
                });
            self.view.apply_react_menu(&self.react_menu);
        } else {
            self.on_components_registered(manifest.components);
            self.instance
                .set_components_registered_delegate(move |_: Vec<String>| {
                    let Some(dispatcher) = dispatcher.upgrade() else {
                        tracing::debug!("components registered after ui loop stopped");
                        return;
                    };
                    dispatcher.deliver("present react menu", vec![UiMessage::PresentReactMenu]);
                });
        }
    }

    fn on_components_registered(&mut self, components: Vec<Component>) {
        if self.is_loaded {
            // Components reported by the runtime may not match what the
            // session stored, so only a sole component is opened.
            if let [component] = components.as_slice() {
                self.load_react_component(component);
            }
        } else {
            let index = if components.len() == 1 {
                Some(0)
            } else {
                self.last_opened_component_index(components.len())
            };
            self.pending_component = index.and_then(|index| components.get(index).cloned());
        }

        self.react_menu.rebuild_component_entries(&components);
        self.view.apply_react_menu(&self.react_menu);
    }

    fn last_opened_component_index(&self, component_count: usize) -> Option<usize> {
        if !self.session.should_remember_last_component() {
            return None;
        }

        let index = self
            .session
            .last_opened_component(&self.manifest_checksum)?;
        if index >= component_count {
            tracing::info!(
                "ignoring stored component index {index}; manifest has {component_count} component(s)"
            );
            return None;
        }
        Some(index)
    }

    fn open_component(&mut self, index: usize) {
        let Some(entry) = self.react_menu.entry(index) else {
            tracing::warn!("no component menu entry at index {index}");
            return;
        };
        let component = entry.component.clone();

        self.load_react_component(&component);
        if !self.session.should_remember_last_component() {
            return;
        }
        if let Err(error) = self.session.store_component(index, &self.manifest_checksum) {
            tracing::warn!("failed to store last opened component: {error}");
        }
    }

    fn load_react_component(&mut self, component: &Component) {
        let props = RootViewProps::for_component(component);
        let container = if component.is_modal() {
            RootContainer::Dialog
        } else {
            RootContainer::Primary
        };

        if !self.view.is_container_bound(container) {
            self.view.bind_container(container);
        }
        self.view.render_component(container, &props);

        match container {
            RootContainer::Dialog => self.view.show_content_dialog(component.title()),
            RootContainer::Primary => {
                self.view.set_title(component.title());
                self.presented = Some(component.clone());
            }
        }
        tracing::info!(
            "presenting component '{}' in {} container",
            component.app_key,
            container.as_str()
        );
    }

    /// Re-runs the active bundle and renders the presented component again;
    /// the runtime drops mounted roots on reload.
    fn reload(&mut self) {
        self.instance.reload();
        if let Some(component) = self.presented.clone() {
            self.load_react_component(&component);
        }
    }

    fn present_react_menu(&mut self) {
        if !self.is_presenting() {
            self.view.open_react_menu();
        }
    }

    fn toggle_remember_last_component(&mut self) {
        let enabled = !self.session.should_remember_last_component();
        if let Err(error) = self.session.set_should_remember_last_component(enabled) {
            tracing::warn!("failed to persist remember last component: {error}");
        }
        self.react_menu.remember_last_component = self.session.should_remember_last_component();
        self.view.apply_react_menu(&self.react_menu);
    }

    fn toggle_break_on_first_line(&mut self) {
        let value = !self.instance.break_on_first_line();
        self.debug_menu.break_on_first_line.text = break_on_first_line_text(value);
        self.instance.set_break_on_first_line(value);
        self.view.apply_debug_menu(&self.debug_menu);
    }

    fn toggle_direct_debugger(&mut self) {
        let value = !self.instance.use_direct_debugger();
        self.debug_menu.direct_debugger.text = direct_debugger_text(value);
        self.instance.set_use_direct_debugger(value);
        self.view.apply_debug_menu(&self.debug_menu);
    }

    fn toggle_fast_refresh(&mut self) {
        if !self.instance.is_fast_refresh_available() {
            tracing::debug!("fast refresh toggle ignored: bundle not served by dev server");
            return;
        }
        let value = !self.instance.use_fast_refresh();
        self.debug_menu.fast_refresh.text = fast_refresh_text(value);
        self.instance.set_use_fast_refresh(value);
        self.view.apply_debug_menu(&self.debug_menu);
    }

    fn toggle_web_debugger(&mut self) {
        if !self.instance.is_web_debugger_available() {
            tracing::debug!("web debugger toggle ignored: bundle not served by dev server");
            return;
        }
        let value = !self.instance.use_web_debugger();
        self.debug_menu.web_debugger.text = web_debugger_text(value);
        self.instance.set_use_web_debugger(value);
        self.view.apply_debug_menu(&self.debug_menu);
    }
}
