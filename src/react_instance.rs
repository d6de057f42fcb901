//! Wrapper around the embedded React Native runtime.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use url::Url;

use crate::bundle::{dev_server_bundle_url, find_embedded_bundle, BundleLocation, JsBundleSource};

/// The embedded runtime bridge. Implementations own the JavaScript engine.
pub trait ReactRuntime: Send {
    /// Starts (or restarts) the runtime against `location`.
    fn load_bundle(&mut self, location: &BundleLocation) -> bool;
    fn reload(&mut self);

    fn break_on_first_line(&self) -> bool;
    fn set_break_on_first_line(&mut self, value: bool);

    fn use_direct_debugger(&self) -> bool;
    fn set_use_direct_debugger(&mut self, value: bool);

    fn use_fast_refresh(&self) -> bool;
    fn set_use_fast_refresh(&mut self, value: bool);

    fn use_web_debugger(&self) -> bool;
    fn set_use_web_debugger(&mut self, value: bool);

    fn toggle_element_inspector(&self);

    fn use_custom_developer_menu(&self) -> bool;
}

pub type OnComponentsRegistered = Arc<dyn Fn(Vec<String>) + Send + Sync>;

type DelegateSlot = Arc<Mutex<Option<OnComponentsRegistered>>>;

/// Handed to the runtime so it can report registered app keys from any thread.
#[derive(Clone, Default)]
pub struct RegistrationNotifier {
    delegate: DelegateSlot,
}

impl RegistrationNotifier {
    pub fn notify(&self, app_keys: Vec<String>) {
        let delegate = match self.delegate.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                tracing::error!("components registered delegate lock poisoned");
                return;
            }
        };
        match delegate {
            Some(delegate) => delegate(app_keys),
            None => tracing::debug!("components registered without a delegate"),
        }
    }
}

pub struct ReactInstance {
    runtime: Box<dyn ReactRuntime>,
    bundle_dir: PathBuf,
    bundle_root: Option<String>,
    dev_server_url: Url,
    source: JsBundleSource,
    delegate: DelegateSlot,
}

impl ReactInstance {
    pub fn new(runtime: Box<dyn ReactRuntime>, bundle_dir: PathBuf, dev_server_url: Url) -> Self {
        Self {
            runtime,
            bundle_dir,
            bundle_root: None,
            dev_server_url,
            source: JsBundleSource::DevServer,
            delegate: DelegateSlot::default(),
        }
    }

    pub fn bundle_root(&self) -> Option<&str> {
        self.bundle_root.as_deref()
    }

    pub fn set_bundle_root(&mut self, bundle_root: Option<String>) {
        self.bundle_root = bundle_root;
    }

    pub fn source(&self) -> JsBundleSource {
        self.source
    }

    /// Starts the runtime against `source`. The active source only changes
    /// when the runtime accepts the bundle.
    pub fn load_js_bundle_from(&mut self, source: JsBundleSource) -> bool {
        let location = match source {
            JsBundleSource::DevServer => {
                match dev_server_bundle_url(&self.dev_server_url, self.bundle_root()) {
                    Some(url) => BundleLocation::DevServer(url),
                    None => {
                        tracing::warn!(
                            "cannot build bundle url from dev server {}",
                            self.dev_server_url
                        );
                        return false;
                    }
                }
            }
            JsBundleSource::Embedded => {
                match find_embedded_bundle(&self.bundle_dir, self.bundle_root()) {
                    Some(path) => BundleLocation::Embedded(path),
                    None => {
                        tracing::info!(
                            "no embedded bundle found in {}",
                            self.bundle_dir.display()
                        );
                        return false;
                    }
                }
            }
        };

        if !self.runtime.load_bundle(&location) {
            tracing::warn!("runtime rejected bundle {location:?}");
            return false;
        }

        tracing::info!("loaded bundle {location:?}");
        self.source = source;
        true
    }

    pub fn reload(&mut self) {
        self.runtime.reload();
    }

    pub fn is_fast_refresh_available(&self) -> bool {
        self.source == JsBundleSource::DevServer
    }

    pub fn is_web_debugger_available(&self) -> bool {
        self.source == JsBundleSource::DevServer
    }

    pub fn break_on_first_line(&self) -> bool {
        self.runtime.break_on_first_line()
    }

    pub fn set_break_on_first_line(&mut self, value: bool) {
        self.runtime.set_break_on_first_line(value);
    }

    pub fn use_direct_debugger(&self) -> bool {
        self.runtime.use_direct_debugger()
    }

    pub fn set_use_direct_debugger(&mut self, value: bool) {
        self.runtime.set_use_direct_debugger(value);
    }

    pub fn use_fast_refresh(&self) -> bool {
        self.runtime.use_fast_refresh()
    }

    pub fn set_use_fast_refresh(&mut self, value: bool) {
        self.runtime.set_use_fast_refresh(value);
    }

    pub fn use_web_debugger(&self) -> bool {
        self.runtime.use_web_debugger()
    }

    pub fn set_use_web_debugger(&mut self, value: bool) {
        self.runtime.set_use_web_debugger(value);
    }

    pub fn toggle_element_inspector(&self) {
        self.runtime.toggle_element_inspector();
    }

    pub fn use_custom_developer_menu(&self) -> bool {
        self.runtime.use_custom_developer_menu()
    }

    /// Replaces the components registered delegate.
    pub fn set_components_registered_delegate<F>(&self, delegate: F)
    where
        F: Fn(Vec<String>) + Send + Sync + 'static,
    {
        match self.delegate.lock() {
            Ok(mut guard) => *guard = Some(Arc::new(delegate)),
            Err(_) => tracing::error!("components registered delegate lock poisoned"),
        }
    }

    pub fn registration_notifier(&self) -> RegistrationNotifier {
        RegistrationNotifier {
            delegate: Arc::clone(&self.delegate),
        }
    }
}
