use async_trait::async_trait;
use serde_json::Value;

use crate::{
    manifest::Component,
    menu_labels::{DebugMenu, ReactMenu},
    value_writer::{write_initial_properties, JsonValueWriter},
};

/// Where a component is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootContainer {
    Primary,
    Dialog,
}

impl RootContainer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Dialog => "dialog",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootViewProps {
    pub component_name: String,
    pub initial_props: Option<Value>,
}

impl RootViewProps {
    pub fn for_component(component: &Component) -> Self {
        let mut writer = JsonValueWriter::new();
        write_initial_properties(component.initial_properties.as_ref(), &mut writer);
        Self {
            component_name: component.app_key.clone(),
            initial_props: writer.into_value(),
        }
    }
}

/// The visible window as seen by the page controller.
#[async_trait]
pub trait HostView: Send {
    fn set_title(&mut self, title: &str);

    fn is_container_bound(&self, container: RootContainer) -> bool;
    /// Attaches `container` to the shared runtime instance.
    fn bind_container(&mut self, container: RootContainer);

    fn render_component(&mut self, container: RootContainer, props: &RootViewProps);

    fn show_content_dialog(&mut self, title: &str);

    /// Shows a modal message and waits until it is dismissed.
    async fn show_message_dialog(&mut self, message: &str);

    fn apply_react_menu(&mut self, menu: &ReactMenu);
    fn apply_debug_menu(&mut self, menu: &DebugMenu);
    fn open_react_menu(&mut self);

    fn set_title_bar_height(&mut self, height: f64);
}
