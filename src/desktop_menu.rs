use tauri::{
    menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle,
};

use crate::{
    menu_actions,
    menu_labels::{DebugMenu, ReactMenu, ToggleItem},
};

const REACT_SUBMENU_ID: &str = "react_menu";
const DEBUG_SUBMENU_ID: &str = "debug_menu";

/// Native handles for everything the page controller relabels.
pub(crate) struct DesktopMenuState {
    pub(crate) react_submenu: Submenu<tauri::Wry>,
    pub(crate) debug_submenu: Submenu<tauri::Wry>,
    remember_item: CheckMenuItem<tauri::Wry>,
    web_debugger_item: MenuItem<tauri::Wry>,
    direct_debugger_item: MenuItem<tauri::Wry>,
    break_on_first_line_item: MenuItem<tauri::Wry>,
    fast_refresh_item: MenuItem<tauri::Wry>,
    /// Items after the separator; replaced wholesale on every rebuild.
    dynamic_items: Vec<MenuItem<tauri::Wry>>,
}

fn menu_item(
    app_handle: &AppHandle,
    id: &str,
    text: &str,
    enabled: bool,
) -> Result<MenuItem<tauri::Wry>, String> {
    MenuItem::with_id(app_handle, id, text, enabled, None::<&str>)
        .map_err(|error| format!("Failed to create menu item {id}: {error}"))
}

pub(crate) fn setup_menu(app_handle: &AppHandle) -> Result<DesktopMenuState, String> {
    let default_debug_menu = DebugMenu::default();

    let load_dev_server_item = menu_item(
        app_handle,
        menu_actions::MENU_LOAD_FROM_DEV_SERVER,
        "Load from Dev Server",
        true,
    )?;
    let load_bundle_item = menu_item(
        app_handle,
        menu_actions::MENU_LOAD_FROM_JS_BUNDLE,
        "Load from JS Bundle",
        true,
    )?;
    let remember_item = CheckMenuItem::with_id(
        app_handle,
        menu_actions::MENU_REMEMBER_LAST_COMPONENT,
        "Remember Last Component",
        true,
        false,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create remember last component item: {error}"))?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create react menu separator: {error}"))?;

    let react_submenu = Submenu::with_id_and_items(
        app_handle,
        REACT_SUBMENU_ID,
        "React",
        true,
        &[
            &load_dev_server_item,
            &load_bundle_item,
            &remember_item,
            &separator,
        ],
    )
    .map_err(|error| format!("Failed to build react menu: {error}"))?;

    let reload_item = menu_item(app_handle, menu_actions::MENU_RELOAD, "Reload JavaScript", true)?;
    let web_debugger_item = menu_item(
        app_handle,
        menu_actions::MENU_TOGGLE_WEB_DEBUGGER,
        default_debug_menu.web_debugger.text,
        default_debug_menu.web_debugger.enabled,
    )?;
    let direct_debugger_item = menu_item(
        app_handle,
        menu_actions::MENU_TOGGLE_DIRECT_DEBUGGER,
        default_debug_menu.direct_debugger.text,
        default_debug_menu.direct_debugger.enabled,
    )?;
    let break_on_first_line_item = menu_item(
        app_handle,
        menu_actions::MENU_TOGGLE_BREAK_ON_FIRST_LINE,
        default_debug_menu.break_on_first_line.text,
        default_debug_menu.break_on_first_line.enabled,
    )?;
    let fast_refresh_item = menu_item(
        app_handle,
        menu_actions::MENU_TOGGLE_FAST_REFRESH,
        default_debug_menu.fast_refresh.text,
        default_debug_menu.fast_refresh.enabled,
    )?;
    let inspector_item = menu_item(
        app_handle,
        menu_actions::MENU_TOGGLE_INSPECTOR,
        "Toggle Element Inspector",
        true,
    )?;

    let debug_submenu = Submenu::with_id_and_items(
        app_handle,
        DEBUG_SUBMENU_ID,
        "Debug",
        default_debug_menu.enabled,
        &[
            &reload_item,
            &web_debugger_item,
            &direct_debugger_item,
            &break_on_first_line_item,
            &fast_refresh_item,
            &inspector_item,
        ],
    )
    .map_err(|error| format!("Failed to build debug menu: {error}"))?;

    let menu = Menu::with_items(app_handle, &[&react_submenu, &debug_submenu])
        .map_err(|error| format!("Failed to build menu bar: {error}"))?;
    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install menu bar: {error}"))?;

    Ok(DesktopMenuState {
        react_submenu,
        debug_submenu,
        remember_item,
        web_debugger_item,
        direct_debugger_item,
        break_on_first_line_item,
        fast_refresh_item,
        dynamic_items: Vec::new(),
    })
}

pub(crate) fn apply_react_menu(
    state: &mut DesktopMenuState,
    app_handle: &AppHandle,
    menu: &ReactMenu,
) -> Result<(), String> {
    state
        .remember_item
        .set_checked(menu.remember_last_component)
        .map_err(|error| format!("Failed to update remember last component item: {error}"))?;

    for item in state.dynamic_items.drain(..) {
        state
            .react_submenu
            .remove(&item)
            .map_err(|error| format!("Failed to remove component menu item: {error}"))?;
    }

    if let Some(status_text) = menu.status_text {
        let status_item = menu_item(
            app_handle,
            menu_actions::MENU_MANIFEST_STATUS,
            status_text,
            false,
        )?;
        state.dynamic_items.push(status_item);
    }

    for entry in &menu.entries {
        let accelerator = entry.accelerator.map(|accelerator| accelerator.to_string());
        let item = MenuItem::with_id(
            app_handle,
            entry.id.as_str(),
            entry.mnemonic_label(),
            true,
            accelerator.as_deref(),
        )
        .map_err(|error| format!("Failed to create menu item for {}: {error}", entry.label))?;
        state.dynamic_items.push(item);
    }

    for item in &state.dynamic_items {
        state
            .react_submenu
            .append(item)
            .map_err(|error| format!("Failed to append component menu item: {error}"))?;
    }
    Ok(())
}

fn apply_toggle_item(
    item: &MenuItem<tauri::Wry>,
    toggle: &ToggleItem,
    item_name: &str,
) -> Result<(), String> {
    item.set_text(toggle.text)
        .map_err(|error| format!("Failed to update menu text for {item_name}: {error}"))?;
    item.set_enabled(toggle.enabled)
        .map_err(|error| format!("Failed to update menu state for {item_name}: {error}"))
}

pub(crate) fn apply_debug_menu(state: &DesktopMenuState, menu: &DebugMenu) -> Result<(), String> {
    apply_toggle_item(
        &state.web_debugger_item,
        &menu.web_debugger,
        menu_actions::MENU_TOGGLE_WEB_DEBUGGER,
    )?;
    apply_toggle_item(
        &state.direct_debugger_item,
        &menu.direct_debugger,
        menu_actions::MENU_TOGGLE_DIRECT_DEBUGGER,
    )?;
    apply_toggle_item(
        &state.break_on_first_line_item,
        &menu.break_on_first_line,
        menu_actions::MENU_TOGGLE_BREAK_ON_FIRST_LINE,
    )?;
    apply_toggle_item(
        &state.fast_refresh_item,
        &menu.fast_refresh,
        menu_actions::MENU_TOGGLE_FAST_REFRESH,
    )?;
    state
        .debug_submenu
        .set_enabled(menu.enabled)
        .map_err(|error| format!("Failed to update debug menu state: {error}"))
}
