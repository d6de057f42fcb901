pub const MENU_LOAD_FROM_DEV_SERVER: &str = "load_from_dev_server";
pub const MENU_LOAD_FROM_JS_BUNDLE: &str = "load_from_js_bundle";
pub const MENU_REMEMBER_LAST_COMPONENT: &str = "remember_last_component";
pub const MENU_MANIFEST_STATUS: &str = "manifest_status";
pub const MENU_RELOAD: &str = "reload";
pub const MENU_TOGGLE_WEB_DEBUGGER: &str = "toggle_web_debugger";
pub const MENU_TOGGLE_DIRECT_DEBUGGER: &str = "toggle_direct_debugger";
pub const MENU_TOGGLE_BREAK_ON_FIRST_LINE: &str = "toggle_break_on_first_line";
pub const MENU_TOGGLE_FAST_REFRESH: &str = "toggle_fast_refresh";
pub const MENU_TOGGLE_INSPECTOR: &str = "toggle_inspector";

const COMPONENT_MENU_PREFIX: &str = "component:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LoadFromDevServer,
    LoadFromJsBundle,
    ToggleRememberLastComponent,
    Reload,
    ToggleWebDebugger,
    ToggleDirectDebugger,
    ToggleBreakOnFirstLine,
    ToggleFastRefresh,
    ToggleInspector,
    OpenComponent(usize),
}

pub fn component_menu_id(index: usize) -> String {
    format!("{COMPONENT_MENU_PREFIX}{index}")
}

pub fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_LOAD_FROM_DEV_SERVER => Some(MenuAction::LoadFromDevServer),
        MENU_LOAD_FROM_JS_BUNDLE => Some(MenuAction::LoadFromJsBundle),
        MENU_REMEMBER_LAST_COMPONENT => Some(MenuAction::ToggleRememberLastComponent),
        MENU_RELOAD => Some(MenuAction::Reload),
        MENU_TOGGLE_WEB_DEBUGGER => Some(MenuAction::ToggleWebDebugger),
        MENU_TOGGLE_DIRECT_DEBUGGER => Some(MenuAction::ToggleDirectDebugger),
        MENU_TOGGLE_BREAK_ON_FIRST_LINE => Some(MenuAction::ToggleBreakOnFirstLine),
        MENU_TOGGLE_FAST_REFRESH => Some(MenuAction::ToggleFastRefresh),
        MENU_TOGGLE_INSPECTOR => Some(MenuAction::ToggleInspector),
        other => other
            .strip_prefix(COMPONENT_MENU_PREFIX)
            .and_then(|index| index.parse().ok())
            .map(MenuAction::OpenComponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        let cases = [
            (MENU_LOAD_FROM_DEV_SERVER, MenuAction::LoadFromDevServer),
            (MENU_LOAD_FROM_JS_BUNDLE, MenuAction::LoadFromJsBundle),
            (
                MENU_REMEMBER_LAST_COMPONENT,
                MenuAction::ToggleRememberLastComponent,
            ),
            (MENU_RELOAD, MenuAction::Reload),
            (MENU_TOGGLE_WEB_DEBUGGER, MenuAction::ToggleWebDebugger),
            (MENU_TOGGLE_DIRECT_DEBUGGER, MenuAction::ToggleDirectDebugger),
            (
                MENU_TOGGLE_BREAK_ON_FIRST_LINE,
                MenuAction::ToggleBreakOnFirstLine,
            ),
            (MENU_TOGGLE_FAST_REFRESH, MenuAction::ToggleFastRefresh),
            (MENU_TOGGLE_INSPECTOR, MenuAction::ToggleInspector),
        ];
        for (menu_id, action) in cases {
            assert_eq!(action_from_menu_id(menu_id), Some(action));
        }
    }

    #[test]
    fn action_from_menu_id_parses_component_entries() {
        assert_eq!(
            action_from_menu_id(&component_menu_id(12)),
            Some(MenuAction::OpenComponent(12))
        );
        assert_eq!(action_from_menu_id("component:"), None);
        assert_eq!(action_from_menu_id("component:-1"), None);
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
        assert_eq!(action_from_menu_id(MENU_MANIFEST_STATUS), None);
    }
}
