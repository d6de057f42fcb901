use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tauri::{webview::PageLoadEvent, Manager};

use crate::{
    config::ShellConfig,
    desktop_menu,
    desktop_runtime::WebviewRuntime,
    desktop_view::DesktopView,
    dev_server::HttpDevServerProbe,
    logging::{init_logging, resolve_desktop_log_path},
    main_page::{MainPage, PageServices},
    manifest::{load_manifest, Manifest},
    menu_actions::action_from_menu_id,
    react_instance::ReactInstance,
    session::{FileSessionStore, MemorySessionStore, SessionStore},
    ui_dispatch::{ui_channel, UiMessage},
    MAIN_WINDOW_LABEL, UI_CHANNEL_CAPACITY,
};

fn load_startup_manifest(config: &ShellConfig) -> Option<Manifest> {
    match load_manifest(&config.resource_dir) {
        Ok(manifest) => Some(manifest),
        Err(error) => {
            tracing::warn!("{error}");
            None
        }
    }
}

fn open_session_store(config: &ShellConfig) -> Box<dyn SessionStore> {
    match &config.session_path {
        Some(path) => {
            let store = FileSessionStore::new(path);
            tracing::info!("session state path: {}", store.path().display());
            Box::new(store)
        }
        None => {
            tracing::warn!("no app data directory; session state will not persist");
            Box::new(MemorySessionStore::new())
        }
    }
}

pub fn run() {
    let config = ShellConfig::from_env();
    init_logging(config.log_dir.as_deref());

    tracing::info!("desktop process starting");
    if let Some(log_dir) = &config.log_dir {
        tracing::info!(
            "desktop log path: {}",
            resolve_desktop_log_path(log_dir).display()
        );
    }

    let (dispatcher, inbox) = ui_channel(UI_CHANNEL_CAPACITY);
    let menu_dispatcher = dispatcher.clone();
    let page_load_dispatcher = dispatcher.clone();
    let navigated = Arc::new(AtomicBool::new(false));

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(dispatcher.clone())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::test_app_is_desktop_runtime,
            crate::desktop_bridge_commands::test_app_components_registered,
            crate::desktop_bridge_commands::test_app_title_bar_metrics_changed,
            crate::desktop_bridge_commands::test_app_present_react_menu,
        ])
        .on_menu_event(move |_app_handle, event| {
            let menu_id = event.id().as_ref();
            match action_from_menu_id(menu_id) {
                Some(action) => {
                    menu_dispatcher.dispatch_logged("menu action", UiMessage::MenuAction(action))
                }
                None => tracing::debug!("ignoring menu event {menu_id}"),
            }
        })
        .on_page_load(move |webview, payload| {
            if webview.label() != MAIN_WINDOW_LABEL {
                return;
            }
            if let PageLoadEvent::Finished = payload.event() {
                tracing::debug!("page-load finished: {}", payload.url());
                // The host page script must exist before the first bundle load.
                if !navigated.swap(true, Ordering::SeqCst) {
                    page_load_dispatcher.dispatch_logged("navigation", UiMessage::NavigatedTo);
                }
                page_load_dispatcher.dispatch_logged("page loaded", UiMessage::Loaded);
            }
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();
            let menu = desktop_menu::setup_menu(&app_handle)?;

            let instance = ReactInstance::new(
                Box::new(WebviewRuntime::new(app_handle.clone())),
                config.bundle_dir(),
                config.dev_server_url.clone(),
            );
            app_handle.manage(instance.registration_notifier());

            let page = MainPage::new(
                load_startup_manifest(&config),
                PageServices {
                    instance,
                    session: open_session_store(&config),
                    probe: Arc::new(HttpDevServerProbe::new(&config.dev_server_url)),
                    view: Box::new(DesktopView::new(app_handle.clone(), menu)),
                    dispatcher,
                },
            );
            tauri::async_runtime::spawn(page.run(inbox));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
