//! Menu models and their captions. Host views mirror these onto native menus.

use std::fmt;

use crate::{
    manifest::Component, menu_actions, MANIFEST_PARSE_FAILURE_TEXT, MAX_ACCELERATED_COMPONENTS,
};

pub fn menu_item_text(
    is_enabled: bool,
    enable_text: &'static str,
    disable_text: &'static str,
) -> &'static str {
    if is_enabled {
        disable_text
    } else {
        enable_text
    }
}

pub fn web_debugger_text(value: bool) -> &'static str {
    menu_item_text(
        value,
        "Enable Remote JS Debugging",
        "Disable Remote JS Debugging",
    )
}

pub fn direct_debugger_text(value: bool) -> &'static str {
    menu_item_text(value, "Enable Direct Debugging", "Disable Direct Debugging")
}

pub fn break_on_first_line_text(value: bool) -> &'static str {
    menu_item_text(
        value,
        "Enable Break on First Line",
        "Disable Break on First Line",
    )
}

pub fn fast_refresh_text(value: bool) -> &'static str {
    menu_item_text(value, "Enable Fast Refresh", "Disable Fast Refresh")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Control,
    Shift,
}

impl Modifier {
    fn label(self) -> &'static str {
        match self {
            Self::Control => "Ctrl",
            Self::Shift => "Shift",
        }
    }
}

pub const COMPONENT_ACCELERATOR_MODIFIERS: [Modifier; 2] = [Modifier::Control, Modifier::Shift];

/// Keyboard shortcut bound to a numeral key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accelerator {
    pub modifiers: [Modifier; 2],
    pub digit: u8,
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.modifiers {
            write!(f, "{}+", modifier.label())?;
        }
        write!(f, "{}", self.digit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMenuEntry {
    pub id: String,
    pub label: String,
    pub component: Component,
    pub access_key: Option<char>,
    pub accelerator: Option<Accelerator>,
}

impl ComponentMenuEntry {
    /// Menu text with the access key marked as a mnemonic (`&1 Title`).
    pub fn mnemonic_label(&self) -> String {
        match self.access_key {
            Some(access_key) => format!("&{access_key} {}", self.label),
            None => self.label.clone(),
        }
    }
}

/// The "React" menu: fixed items, a separator, then one entry per component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactMenu {
    pub remember_last_component: bool,
    /// Disabled entry shown in place of components, e.g. on a bad manifest.
    pub status_text: Option<&'static str>,
    pub entries: Vec<ComponentMenuEntry>,
}

impl ReactMenu {
    pub fn new(remember_last_component: bool) -> Self {
        Self {
            remember_last_component,
            ..Self::default()
        }
    }

    pub fn unparsable_manifest(remember_last_component: bool) -> Self {
        Self {
            remember_last_component,
            status_text: Some(MANIFEST_PARSE_FAILURE_TEXT),
            entries: Vec::new(),
        }
    }

    /// Replaces every per-component entry.
    pub fn rebuild_component_entries(&mut self, components: &[Component]) {
        self.entries = components
            .iter()
            .enumerate()
            .map(|(index, component)| {
                let digit = (index < MAX_ACCELERATED_COMPONENTS).then(|| (index + 1) as u8);
                ComponentMenuEntry {
                    id: menu_actions::component_menu_id(index),
                    label: component.title().to_string(),
                    component: component.clone(),
                    access_key: digit.and_then(|digit| char::from_digit(u32::from(digit), 10)),
                    accelerator: digit.map(|digit| Accelerator {
                        modifiers: COMPONENT_ACCELERATOR_MODIFIERS,
                        digit,
                    }),
                }
            })
            .collect();
    }

    pub fn entry(&self, index: usize) -> Option<&ComponentMenuEntry> {
        self.entries.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    pub text: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMenu {
    pub enabled: bool,
    pub web_debugger: ToggleItem,
    pub direct_debugger: ToggleItem,
    pub break_on_first_line: ToggleItem,
    pub fast_refresh: ToggleItem,
}

impl Default for DebugMenu {
    fn default() -> Self {
        Self {
            enabled: false,
            web_debugger: ToggleItem {
                text: web_debugger_text(false),
                enabled: true,
            },
            direct_debugger: ToggleItem {
                text: direct_debugger_text(false),
                enabled: true,
            },
            break_on_first_line: ToggleItem {
                text: break_on_first_line_text(false),
                enabled: true,
            },
            fast_refresh: ToggleItem {
                text: fast_refresh_text(false),
                enabled: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(count: usize) -> Vec<Component> {
        (1..=count)
            .map(|n| Component::from_app_key(format!("K{n}")))
            .collect()
    }

    #[test]
    fn menu_item_text_describes_the_next_action() {
        assert_eq!(fast_refresh_text(false), "Enable Fast Refresh");
        assert_eq!(fast_refresh_text(true), "Disable Fast Refresh");
        assert_eq!(web_debugger_text(true), "Disable Remote JS Debugging");
        assert_eq!(direct_debugger_text(false), "Enable Direct Debugging");
        assert_eq!(break_on_first_line_text(true), "Disable Break on First Line");
    }

    #[test]
    fn rebuild_assigns_incrementing_accelerators_to_first_nine() {
        let mut menu = ReactMenu::new(false);
        menu.rebuild_component_entries(&components(11));

        assert_eq!(menu.entries.len(), 11);
        let digits: Vec<_> = menu
            .entries
            .iter()
            .filter_map(|entry| entry.accelerator.map(|accelerator| accelerator.digit))
            .collect();
        assert_eq!(digits, (1..=9).collect::<Vec<u8>>());
        assert_eq!(menu.entries[0].access_key, Some('1'));
        assert_eq!(menu.entries[8].access_key, Some('9'));
        assert_eq!(menu.entries[9].access_key, None);
        assert_eq!(menu.entries[10].accelerator, None);
    }

    #[test]
    fn mnemonic_label_marks_access_key_only_when_present() {
        let mut menu = ReactMenu::new(false);
        menu.rebuild_component_entries(&components(10));

        let first = &menu.entries[0];
        assert_eq!(first.mnemonic_label(), format!("&1 {}", first.label));
        let tenth = &menu.entries[9];
        assert_eq!(tenth.mnemonic_label(), tenth.label);
    }

    #[test]
    fn rebuild_replaces_previous_entries() {
        let mut menu = ReactMenu::new(false);
        menu.rebuild_component_entries(&components(4));
        menu.rebuild_component_entries(&components(2));

        let labels: Vec<_> = menu.entries.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, ["K1", "K2"]);
        assert_eq!(menu.entry(1).map(|entry| entry.id.as_str()), Some("component:1"));
    }

    #[test]
    fn entry_labels_prefer_display_name() {
        let mut named = Component::from_app_key("Example");
        named.display_name = Some("Example App".to_string());

        let mut menu = ReactMenu::new(false);
        menu.rebuild_component_entries(&[named, Component::from_app_key("Bare")]);
        assert_eq!(menu.entries[0].label, "Example App");
        assert_eq!(menu.entries[1].label, "Bare");
    }

    #[test]
    fn accelerator_display_lists_modifiers_then_digit() {
        let accelerator = Accelerator {
            modifiers: COMPONENT_ACCELERATOR_MODIFIERS,
            digit: 3,
        };
        assert_eq!(accelerator.to_string(), "Ctrl+Shift+3");
    }
}
