//! `app.json` manifest model and loading.

use std::{fs, path::Path};

use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{
    error::ManifestError,
    property_value::{deserialize_property_map, PropertyMap},
    MANIFEST_FILE, PRESENTATION_STYLE_MODAL,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PresentationStyle {
    #[default]
    Default,
    Modal,
}

impl From<String> for PresentationStyle {
    fn from(raw: String) -> Self {
        if raw == PRESENTATION_STYLE_MODAL {
            Self::Modal
        } else {
            Self::Default
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub app_key: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub presentation_style: PresentationStyle,
    #[serde(default, deserialize_with = "deserialize_property_map")]
    pub initial_properties: Option<PropertyMap>,
}

impl Component {
    pub fn from_app_key(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            display_name: None,
            presentation_style: PresentationStyle::Default,
            initial_properties: None,
        }
    }

    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.app_key)
    }

    pub fn is_modal(&self) -> bool {
        self.presentation_style == PresentationStyle::Modal
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub bundle_root: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    /// Hex SHA-256 of the raw manifest; keys session lookups.
    #[serde(skip)]
    pub checksum: String,
}

pub fn parse_manifest(raw: &str) -> Result<Manifest, ManifestError> {
    let mut manifest: Manifest = serde_json::from_str(raw)?;
    manifest.checksum = checksum_hex(raw.as_bytes());
    Ok(manifest)
}

pub fn load_manifest(resource_dir: &Path) -> Result<Manifest, ManifestError> {
    let path = resource_dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&path).map_err(|source| ManifestError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest = parse_manifest(&raw)?;
    tracing::info!(
        "loaded manifest {} with {} component(s)",
        path.display(),
        manifest.components.len()
    );
    Ok(manifest)
}

fn checksum_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property_value::PropertyValue;

    const EXAMPLE: &str = r#"{
        "name": "Example",
        "displayName": "Example App",
        "bundleRoot": "main",
        "components": [
            { "appKey": "Example", "displayName": "App" },
            {
                "appKey": "Settings",
                "presentationStyle": "modal",
                "initialProperties": { "concurrentRoot": true, "theme": "dark" }
            },
            { "appKey": "Plain", "presentationStyle": "fullscreen" }
        ]
    }"#;

    #[test]
    fn parse_manifest_reads_all_fields() {
        let manifest = parse_manifest(EXAMPLE).expect("manifest should parse");
        assert_eq!(manifest.name.as_deref(), Some("Example"));
        assert_eq!(manifest.display_name, "Example App");
        assert_eq!(manifest.bundle_root.as_deref(), Some("main"));
        assert_eq!(manifest.components.len(), 3);

        let settings = &manifest.components[1];
        assert!(settings.is_modal());
        assert_eq!(settings.title(), "Settings");
        assert_eq!(
            settings.initial_properties,
            Some(vec![
                ("concurrentRoot".to_string(), PropertyValue::Bool(true)),
                ("theme".to_string(), PropertyValue::String("dark".into())),
            ])
        );

        assert_eq!(manifest.components[0].title(), "App");
        assert!(!manifest.components[2].is_modal());
    }

    #[test]
    fn checksum_tracks_manifest_content() {
        let first = parse_manifest(EXAMPLE).expect("manifest should parse");
        let again = parse_manifest(EXAMPLE).expect("manifest should parse");
        let changed = parse_manifest(r#"{"displayName": "Other"}"#).expect("manifest should parse");

        assert_eq!(first.checksum.len(), 64);
        assert_eq!(first.checksum, again.checksum);
        assert_ne!(first.checksum, changed.checksum);
        assert!(changed.components.is_empty());
    }

    #[test]
    fn parse_manifest_rejects_non_object_initial_properties() {
        let raw = r#"{"components": [{"appKey": "A", "initialProperties": [1, 2]}]}"#;
        assert!(matches!(parse_manifest(raw), Err(ManifestError::Parse(_))));
    }

    #[test]
    fn parse_manifest_requires_app_key() {
        let raw = r#"{"components": [{"displayName": "Nameless"}]}"#;
        assert!(parse_manifest(raw).is_err());
    }

    #[test]
    fn load_manifest_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(matches!(
            load_manifest(dir.path()),
            Err(ManifestError::Io { .. })
        ));
    }

    #[test]
    fn load_manifest_reads_app_json_from_resource_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join(MANIFEST_FILE), EXAMPLE).expect("write manifest");
        let manifest = load_manifest(dir.path()).expect("manifest should load");
        assert_eq!(manifest.components[0].app_key, "Example");
    }
}
