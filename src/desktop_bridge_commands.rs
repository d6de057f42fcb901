use tauri::{AppHandle, Manager};

use crate::{
    react_instance::RegistrationNotifier,
    ui_dispatch::{UiDispatcher, UiMessage},
};

#[tauri::command]
pub(crate) fn test_app_is_desktop_runtime() -> bool {
    true
}

/// Called by the host page once the bundle has registered its components.
/// Must stay off the main thread; delivery may wait for queue room.
#[tauri::command]
pub(crate) async fn test_app_components_registered(app_handle: AppHandle, app_keys: Vec<String>) {
    tracing::debug!("bundle registered {} component(s)", app_keys.len());
    app_handle.state::<RegistrationNotifier>().notify(app_keys);
}

#[tauri::command]
pub(crate) async fn test_app_title_bar_metrics_changed(app_handle: AppHandle, height: f64) {
    app_handle.state::<UiDispatcher>().dispatch_logged(
        "title bar metrics",
        UiMessage::TitleBarMetricsChanged { height },
    );
}

#[tauri::command]
pub(crate) async fn test_app_present_react_menu(app_handle: AppHandle) {
    app_handle
        .state::<UiDispatcher>()
        .dispatch_logged("present react menu", UiMessage::PresentReactMenu);
}
