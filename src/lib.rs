//! Desktop host shell for React Native test apps.
//!
//! Reads `app.json`, offers its components in a menu, boots the JavaScript
//! bundle from a development server or from the app package, and exposes the
//! developer toggles of the embedded runtime.

mod app_constants;
pub mod bundle;
pub mod config;
pub mod dev_server;
pub mod error;
pub mod host_view;
pub mod logging;
pub mod main_page;
pub mod manifest;
pub mod menu_actions;
pub mod menu_labels;
pub mod property_value;
pub mod react_instance;
pub mod session;
pub mod ui_dispatch;
pub mod value_writer;

#[cfg(feature = "desktop")]
mod app_runtime;
#[cfg(feature = "desktop")]
mod desktop_bridge_commands;
#[cfg(feature = "desktop")]
mod desktop_menu;
#[cfg(feature = "desktop")]
mod desktop_runtime;
#[cfg(feature = "desktop")]
mod desktop_view;

#[cfg(test)]
mod test_support;

pub use app_constants::*;
#[cfg(feature = "desktop")]
pub use app_runtime::run;
pub use bundle::{BundleLocation, JsBundleSource};
pub use config::ShellConfig;
pub use error::{DispatchError, ManifestError, SessionError};
pub use main_page::{MainPage, PageServices};
pub use manifest::{Component, Manifest, PresentationStyle};
pub use property_value::{PropertyMap, PropertyValue};
pub use react_instance::{ReactInstance, ReactRuntime, RegistrationNotifier};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use ui_dispatch::{ui_channel, UiDispatcher, UiInbox, UiMessage};
