use std::path::{Path, PathBuf};

use url::Url;

use crate::{
    BUNDLE_EXTENSION, DEFAULT_DEV_SERVER_BUNDLE_ROOT, DEV_SERVER_PLATFORM, JS_BUNDLE_NAMES,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsBundleSource {
    #[default]
    DevServer,
    Embedded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleLocation {
    DevServer(Url),
    Embedded(PathBuf),
}

/// Looks for an embedded bundle in `bundle_dir`. A configured bundle root is
/// the only candidate; otherwise the well-known names are tried in order.
pub fn find_embedded_bundle(bundle_dir: &Path, bundle_root: Option<&str>) -> Option<PathBuf> {
    let candidate_path = |name: &str| bundle_dir.join(format!("{name}.{BUNDLE_EXTENSION}"));

    if let Some(root) = bundle_root {
        let path = candidate_path(root);
        return path.is_file().then_some(path);
    }

    JS_BUNDLE_NAMES
        .iter()
        .map(|name| candidate_path(name))
        .find(|path| path.is_file())
}

pub fn dev_server_bundle_url(dev_server: &Url, bundle_root: Option<&str>) -> Option<Url> {
    let root = bundle_root.unwrap_or(DEFAULT_DEV_SERVER_BUNDLE_ROOT);
    let mut url = dev_server
        .join(&format!("{root}.{BUNDLE_EXTENSION}"))
        .ok()?;
    url.query_pairs_mut()
        .append_pair("platform", DEV_SERVER_PLATFORM)
        .append_pair("dev", "true");
    Some(url)
}

pub fn bundle_not_found_message() -> String {
    let mut message =
        String::from("No JavaScript bundle with one of the following names was found in the app:\n\n");
    for name in JS_BUNDLE_NAMES {
        message.push_str(&format!("    \u{2022} {name}.{BUNDLE_EXTENSION}\n"));
    }
    message.push_str(
        "\nPlease make sure the bundle has been built, is appropriately named, and that it \
has been added to 'app.json'. You may have to run 'install-windows-test-app' again \
to update the project files.\n\
\n\
If you meant to use a development server, please make sure it is running.",
    );
    message
}
