use std::fs;

use serde::Serialize;
use serde_json::{json, Value};
use tauri::{AppHandle, Manager};

use crate::{bundle::BundleLocation, react_instance::ReactRuntime, MAIN_WINDOW_LABEL};

const HOST_OBJECT: &str = "window.__REACT_TEST_APP__";

/// Calls `method` on the host page object with JSON-encoded arguments.
pub(crate) fn call_host(app_handle: &AppHandle, method: &str, args: &[Value]) -> Result<(), String> {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        return Err(format!("{method} skipped: main window not found"));
    };

    let encoded_args = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let script = format!("{HOST_OBJECT} && {HOST_OBJECT}.{method}({encoded_args});");
    window
        .eval(&script)
        .map_err(|error| format!("Failed to call host method {method}: {error}"))
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeveloperSettings {
    break_on_first_line: bool,
    use_direct_debugger: bool,
    use_fast_refresh: bool,
    use_web_debugger: bool,
}

/// Runs bundles inside the main webview through the host page script.
pub(crate) struct WebviewRuntime {
    app_handle: AppHandle,
    settings: DeveloperSettings,
}

impl WebviewRuntime {
    pub(crate) fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            settings: DeveloperSettings::default(),
        }
    }

    fn call(&self, method: &str, args: &[Value]) -> bool {
        match call_host(&self.app_handle, method, args) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!("{error}");
                false
            }
        }
    }

    fn apply_settings(&self) {
        self.call("applySettings", &[json!(self.settings)]);
    }
}

impl ReactRuntime for WebviewRuntime {
    fn load_bundle(&mut self, location: &BundleLocation) -> bool {
        match location {
            BundleLocation::DevServer(url) => {
                tracing::info!("loading bundle from {url}");
                self.call(
                    "loadBundle",
                    &[json!({ "url": url.as_str(), "settings": self.settings })],
                )
            }
            BundleLocation::Embedded(path) => match fs::read_to_string(path) {
                Ok(source) => {
                    tracing::info!("loading embedded bundle {}", path.display());
                    self.call(
                        "loadBundleSource",
                        &[json!({
                            "source": source,
                            "sourceUrl": path.display().to_string(),
                            "settings": self.settings,
                        })],
                    )
                }
                Err(error) => {
                    tracing::warn!("failed to read bundle {}: {error}", path.display());
                    false
                }
            },
        }
    }

    fn reload(&mut self) {
        self.call("reload", &[]);
    }

    fn break_on_first_line(&self) -> bool {
        self.settings.break_on_first_line
    }

    fn set_break_on_first_line(&mut self, value: bool) {
        self.settings.break_on_first_line = value;
        self.apply_settings();
    }

    fn use_direct_debugger(&self) -> bool {
        self.settings.use_direct_debugger
    }

    fn set_use_direct_debugger(&mut self, value: bool) {
        self.settings.use_direct_debugger = value;
        self.apply_settings();
    }

    fn use_fast_refresh(&self) -> bool {
        self.settings.use_fast_refresh
    }

    fn set_use_fast_refresh(&mut self, value: bool) {
        self.settings.use_fast_refresh = value;
        self.apply_settings();
    }

    fn use_web_debugger(&self) -> bool {
        self.settings.use_web_debugger
    }

    fn set_use_web_debugger(&mut self, value: bool) {
        self.settings.use_web_debugger = value;
        self.apply_settings();
    }

    fn toggle_element_inspector(&self) {
        self.call("toggleInspector", &[]);
    }

    fn use_custom_developer_menu(&self) -> bool {
        true
    }
}
