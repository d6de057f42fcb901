use std::{env, path::PathBuf};

use url::Url;

use crate::{
    dev_server::normalize_dev_server_url, APP_DATA_DIR_NAME, BUNDLE_DIR, DEV_SERVER_URL_ENV,
    LOG_DIR_ENV, RESOURCE_DIR_ENV, SESSION_FILE, SESSION_PATH_ENV,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Directory holding `app.json` and the `Bundle` directory.
    pub resource_dir: PathBuf,
    /// Session state file; `None` keeps session state in memory.
    pub session_path: Option<PathBuf>,
    pub dev_server_url: Url,
    pub log_dir: Option<PathBuf>,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_resource_dir(), app_data_dir())
    }

    fn from_lookup<F>(lookup: F, default_resource_dir: PathBuf, app_data_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let resource_dir = non_empty(RESOURCE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or(default_resource_dir);
        let session_path = non_empty(SESSION_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| app_data_dir.as_ref().map(|dir| dir.join(SESSION_FILE)));
        let dev_server_url = normalize_dev_server_url(&lookup(DEV_SERVER_URL_ENV).unwrap_or_default());
        let log_dir = non_empty(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| app_data_dir.map(|dir| dir.join("logs")));

        Self {
            resource_dir,
            session_path,
            dev_server_url,
            log_dir,
        }
    }

    pub fn bundle_dir(&self) -> PathBuf {
        self.resource_dir.join(BUNDLE_DIR)
    }
}

fn default_resource_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn app_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::DEFAULT_DEV_SERVER_URL;

    fn config_with(vars: &[(&str, &str)], app_data: Option<&str>) -> ShellConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ShellConfig::from_lookup(
            |key| vars.get(key).cloned(),
            PathBuf::from("/opt/app"),
            app_data.map(PathBuf::from),
        )
    }

    #[test]
    fn defaults_use_exe_dir_and_app_data() {
        let config = config_with(&[], Some("/data/ReactTestApp"));
        assert_eq!(config.resource_dir, PathBuf::from("/opt/app"));
        assert_eq!(config.bundle_dir(), PathBuf::from("/opt/app/Bundle"));
        assert_eq!(
            config.session_path,
            Some(PathBuf::from("/data/ReactTestApp/session.json"))
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/data/ReactTestApp/logs")));
        assert_eq!(config.dev_server_url.as_str(), DEFAULT_DEV_SERVER_URL);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_with(
            &[
                (RESOURCE_DIR_ENV, "/srv/app"),
                (SESSION_PATH_ENV, "/tmp/session.json"),
                (DEV_SERVER_URL_ENV, "http://192.168.1.5:8081"),
                (LOG_DIR_ENV, " "),
            ],
            None,
        );
        assert_eq!(config.resource_dir, PathBuf::from("/srv/app"));
        assert_eq!(config.session_path, Some(PathBuf::from("/tmp/session.json")));
        assert_eq!(config.dev_server_url.as_str(), "http://192.168.1.5:8081/");
        assert_eq!(config.log_dir, None);
    }
}
