use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::{json, Value};
use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tokio::sync::oneshot;

use crate::{
    desktop_menu::{self, DesktopMenuState},
    desktop_runtime::call_host,
    host_view::{HostView, RootContainer, RootViewProps},
    menu_labels::{DebugMenu, ReactMenu},
    MAIN_WINDOW_LABEL,
};

pub(crate) struct DesktopView {
    app_handle: AppHandle,
    menu: DesktopMenuState,
    bound_containers: HashSet<RootContainer>,
}

impl DesktopView {
    pub(crate) fn new(app_handle: AppHandle, menu: DesktopMenuState) -> Self {
        Self {
            app_handle,
            menu,
            bound_containers: HashSet::new(),
        }
    }

    fn call(&self, method: &str, args: &[Value]) {
        if let Err(error) = call_host(&self.app_handle, method, args) {
            tracing::warn!("{error}");
        }
    }
}

#[async_trait]
impl HostView for DesktopView {
    fn set_title(&mut self, title: &str) {
        let Some(window) = self.app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
            tracing::warn!("set_title skipped: main window not found");
            return;
        };
        if let Err(error) = window.set_title(title) {
            tracing::warn!("failed to set window title: {error}");
        }
    }

    fn is_container_bound(&self, container: RootContainer) -> bool {
        self.bound_containers.contains(&container)
    }

    fn bind_container(&mut self, container: RootContainer) {
        self.call("bindContainer", &[json!(container.as_str())]);
        self.bound_containers.insert(container);
    }

    fn render_component(&mut self, container: RootContainer, props: &RootViewProps) {
        self.call(
            "render",
            &[
                json!(container.as_str()),
                json!(props.component_name),
                props.initial_props.clone().unwrap_or(Value::Null),
            ],
        );
    }

    fn show_content_dialog(&mut self, title: &str) {
        self.call("showContentDialog", &[json!(title)]);
    }

    async fn show_message_dialog(&mut self, message: &str) {
        let (closed_tx, closed_rx) = oneshot::channel();
        self.app_handle
            .dialog()
            .message(message)
            .title(self.app_handle.package_info().name.clone())
            .kind(MessageDialogKind::Info)
            .buttons(MessageDialogButtons::Ok)
            .show(move |_| {
                let _ = closed_tx.send(());
            });
        if closed_rx.await.is_err() {
            tracing::warn!("message dialog closed without a response");
        }
    }

    fn apply_react_menu(&mut self, menu: &ReactMenu) {
        if let Err(error) = desktop_menu::apply_react_menu(&mut self.menu, &self.app_handle, menu) {
            tracing::warn!("{error}");
        }
    }

    fn apply_debug_menu(&mut self, menu: &DebugMenu) {
        if let Err(error) = desktop_menu::apply_debug_menu(&self.menu, menu) {
            tracing::warn!("{error}");
        }
    }

    fn open_react_menu(&mut self) {
        let Some(window) = self.app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
            tracing::warn!("open_react_menu skipped: main window not found");
            return;
        };
        if let Err(error) = window.popup_menu(&self.menu.react_submenu) {
            tracing::warn!("failed to open react menu: {error}");
        }
    }

    fn set_title_bar_height(&mut self, height: f64) {
        self.call("setTitleBarHeight", &[json!(height)]);
    }
}
