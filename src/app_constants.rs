pub const MANIFEST_FILE: &str = "app.json";
pub const BUNDLE_DIR: &str = "Bundle";
pub const BUNDLE_EXTENSION: &str = "bundle";

/// Embedded bundle names, in the order they are searched for.
pub const JS_BUNDLE_NAMES: [&str; 6] = [
    "index.windows",
    "main.windows",
    "index.native",
    "main.native",
    "index",
    "main",
];

pub const DEFAULT_DEV_SERVER_URL: &str = "http://localhost:8081/";
pub const DEV_SERVER_STATUS_PATH: &str = "status";
pub const DEV_SERVER_RUNNING_STATUS: &str = "packager-status:running";
pub const DEV_SERVER_PROBE_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_DEV_SERVER_BUNDLE_ROOT: &str = "index";
pub const DEV_SERVER_PLATFORM: &str = "windows";

pub const DEV_SERVER_UNREACHABLE_MESSAGE: &str = "Cannot connect to your development server. \
Please make sure that it is running and try again.";

pub const MANIFEST_PARSE_FAILURE_TEXT: &str = "Couldn't parse 'app.json'";

pub const PRESENTATION_STYLE_MODAL: &str = "modal";

/// Number of component entries that receive a numeric accelerator (1-9).
pub const MAX_ACCELERATED_COMPONENTS: usize = 9;

pub const UI_CHANNEL_CAPACITY: usize = 64;

pub const RESOURCE_DIR_ENV: &str = "RNTA_RESOURCE_DIR";
pub const SESSION_PATH_ENV: &str = "RNTA_SESSION_PATH";
pub const DEV_SERVER_URL_ENV: &str = "RNTA_DEV_SERVER_URL";
pub const LOG_DIR_ENV: &str = "RNTA_LOG_DIR";

pub const APP_DATA_DIR_NAME: &str = "ReactTestApp";
pub const SESSION_FILE: &str = "session.json";
pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const DEFAULT_LOG_FILTER: &str = "react_test_app=info";

pub const MAIN_WINDOW_LABEL: &str = "main";
